use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{Error, ScrapeResult};

/// Path marker every scene URL must carry.
const MOVIES_PATH_MARKER: &str = "teamskeet.com/movies/";

static LEADING_PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r".+/").unwrap());

/// Validate a scene URL and derive the scene identifier from its trailing
/// path segment. The identifier is both the cache key and the backend
/// document id.
pub fn scene_id_from_url(url: &str) -> ScrapeResult<String> {
    if !url.contains(MOVIES_PATH_MARKER) {
        return Err(Error::NotTeamskeetUrl);
    }

    let scene_id = LEADING_PATH_RE.replace(url, "").into_owned();
    if scene_id.is_empty() {
        return Err(Error::EmptySceneId);
    }

    Ok(scene_id)
}
