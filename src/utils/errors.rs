use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("You need to set the URL (e.g. teamskeet.com/movies/*****)")]
    MissingUrl,

    #[error("The URL is not from a Teamskeet URL (e.g. teamskeet.com/movies/*****)")]
    NotTeamskeetUrl,

    #[error("Error with the scene ID: are you sure that the end of your URL is correct?")]
    EmptySceneId,

    #[error("An error has occurred with the page request (status: {status}), check TeamskeetAPI.log for more details")]
    Request { status: String },

    #[error("Scene not found (wrong ID?)")]
    SceneNotFound,

    #[error("Protected by Cloudflare, retry later")]
    CloudflareBlocked,

    #[error("Invalid page content")]
    InvalidContent,

    #[error("Invalid published date '{date}': {source}")]
    InvalidDate {
        date: String,
        source: chrono::format::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
