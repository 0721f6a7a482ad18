use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::utils::ScrapeResult;

fn record_path(cache_dir: &str, scene_id: &str) -> PathBuf {
    Path::new(cache_dir).join(format!("{scene_id}.json"))
}

/// Look up a previously fetched raw record. `Ok(None)` means a miss; a file
/// that exists but does not parse propagates the decoder error untouched.
pub fn load(cache_dir: &str, scene_id: &str) -> ScrapeResult<Option<Value>> {
    let path = record_path(cache_dir, scene_id);
    if !path.is_file() {
        debug!(target: "tskeet::cache", scene_id = %scene_id, "Cache miss, asking the API");
        return Ok(None);
    }

    debug!(target: "tskeet::cache", path = %path.display(), "Using local JSON");
    let raw = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Persist a raw record under `<cache_dir>/<scene_id>.json` with the
/// original request URL injected, creating the directory if needed.
pub fn save(cache_dir: &str, scene_id: &str, record: &Value, url: &str) -> ScrapeResult<()> {
    fs::create_dir_all(cache_dir)?;

    let mut record = record.clone();
    if let Some(map) = record.as_object_mut() {
        map.insert("url".to_string(), Value::String(url.to_string()));
    }

    let path = record_path(cache_dir, scene_id);
    debug!(target: "tskeet::cache", path = %path.display(), "Saving raw record");
    fs::write(&path, serde_json::to_string_pretty(&record)?)?;
    Ok(())
}
