use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("TSKEET_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Config toml is optional: the scraper must run from a bare
            // install with nothing but its defaults
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of TSKEET)
            .add_source(config::Environment::with_prefix("TSKEET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// ===============================================================================
// Cache
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Directory holding one raw backend record per scene, `<scene id>.json`.
    #[serde(default = "default_cache_dir")]
    pub dir: String,
    /// When true, persist the raw record after a successful remote fetch.
    #[serde(default)]
    pub write_on_fetch: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { dir: default_cache_dir(), write_on_fetch: false }
    }
}

fn default_cache_dir() -> String {
    "scraperJSON/Teamskeet".to_string()
}

// ===============================================================================
// Api
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Elasticsearch document endpoint; the scene id is appended as the
    /// final path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://store2.psmcdn.net/ts-elastic-d5cat0jl5o-videoscontent/_doc".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:79.0) Gecko/20100101 Firefox/79.0".to_string()
}

fn default_connect_timeout() -> u64 { 3 }

fn default_request_timeout() -> u64 { 5 }
