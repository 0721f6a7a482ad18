use std::path::Path;
use std::time::Duration;

use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::utils::{Error, ScrapeResult};

const ORIGIN: &str = "https://www.teamskeet.com";
const REFERER: &str = "https://www.teamskeet.com/";

/// Marker left in the body by the Cloudflare js-challenge interstitial.
const CLOUDFLARE_MARKER: &str = "Please Wait... | Cloudflare";

/// Written on transport failure, next to the binary, truncated each run.
const DIAG_LOG: &str = "TeamskeetAPI.log";

#[derive(Debug, Clone)]
pub struct SceneApi {
    cfg: ApiConfig,
    client: reqwest::Client,
}

impl SceneApi {
    pub fn new(cfg: ApiConfig) -> ScrapeResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;
        Ok(Self { cfg, client })
    }

    fn document_url(&self, scene_id: &str) -> String {
        format!("{}/{}", self.cfg.base_url.trim_end_matches('/'), scene_id)
    }

    /// Fetch the raw scene record for `scene_id` with one GET, no retries.
    ///
    /// Transport failures leave a diagnostic log behind; everything else is
    /// classified from the response body.
    pub async fn fetch_scene(&self, scene_id: &str) -> ScrapeResult<Value> {
        let url = self.document_url(scene_id);
        debug!(target: "tskeet::api", url = %url, "Asking the API");

        let resp = match self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.cfg.user_agent)
            .header(header::ORIGIN, ORIGIN)
            .header(header::REFERER, REFERER)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let status = e.status().map(|s| s.to_string());
                return Err(request_failure(scene_id, status, String::new()));
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(_) => return Err(request_failure(scene_id, Some(status.to_string()), String::new())),
        };

        debug!(target: "tskeet::api", status = %status, "API response received");
        parse_envelope(&body)
    }
}

/// Classify the response body: a `found` envelope wrapping `_source`, a
/// Cloudflare interstitial, or opaque garbage.
fn parse_envelope(body: &str) -> ScrapeResult<Value> {
    let Ok(envelope) = serde_json::from_str::<Value>(body) else {
        if body.contains(CLOUDFLARE_MARKER) {
            return Err(Error::CloudflareBlocked);
        }
        return Err(Error::InvalidContent);
    };

    if !envelope.is_object() {
        return Err(Error::InvalidContent);
    }

    let found = envelope.get("found").and_then(Value::as_bool).unwrap_or(false);
    if !found {
        return Err(Error::SceneNotFound);
    }

    match envelope.get("_source") {
        Some(source) if source.is_object() => Ok(source.clone()),
        _ => Err(Error::InvalidContent),
    }
}

fn request_failure(scene_id: &str, status: Option<String>, body: String) -> Error {
    let status = status.unwrap_or_else(|| "unavailable".to_string());
    if let Err(e) = write_diagnostic(Path::new(DIAG_LOG), scene_id, &body) {
        debug!(target: "tskeet::api", "Failed to write {DIAG_LOG}: {e}");
    }
    Error::Request { status }
}

fn write_diagnostic(path: &Path, scene_id: &str, body: &str) -> std::io::Result<()> {
    std::fs::write(path, format!("Scene ID: {scene_id}\nRequest:\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> SceneApi {
        SceneApi::new(ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn returns_source_when_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abc123"))
            .and(header("Origin", ORIGIN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "found": true,
                "_source": {"title": "Some Scene", "tags": ["Blonde"]},
            })))
            .mount(&server)
            .await;

        let record = api_for(&server).fetch_scene("abc123").await.unwrap();
        assert_eq!(record["title"], "Some Scene");
    }

    #[tokio::test]
    async fn not_found_envelope_is_scene_not_found() {
        let server = MockServer::start().await;
        // The ES endpoint answers 404 with a JSON body, not an error page
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"found": false, "_id": "nope"})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_scene("nope").await.unwrap_err();
        assert!(matches!(err, Error::SceneNotFound));
    }

    #[tokio::test]
    async fn cloudflare_interstitial_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string(
                "<html><title>Please Wait... | Cloudflare</title></html>",
            ))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_scene("abc123").await.unwrap_err();
        assert!(matches!(err, Error::CloudflareBlocked));
    }

    #[tokio::test]
    async fn garbage_body_is_invalid_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>totally unexpected</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_scene("abc123").await.unwrap_err();
        assert!(matches!(err, Error::InvalidContent));
    }

    #[tokio::test]
    async fn non_object_json_body_is_invalid_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "envelope"])))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_scene("abc123").await.unwrap_err();
        assert!(matches!(err, Error::InvalidContent));
    }

    #[tokio::test]
    async fn found_without_source_is_invalid_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"found": true})))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_scene("abc123").await.unwrap_err();
        assert!(matches!(err, Error::InvalidContent));
    }

    #[test]
    fn diagnostic_log_contains_id_and_body() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("TeamskeetAPI.log");
        write_diagnostic(&log, "abc123", "raw body").unwrap();
        let written = std::fs::read_to_string(&log).unwrap();
        assert_eq!(written, "Scene ID: abc123\nRequest:\nraw body");
    }
}
