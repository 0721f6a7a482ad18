use std::io::Read;
use std::str::FromStr;

use tracing::Level;

mod config;
mod core;
mod models;
mod utils;

use models::SceneFragment;
use utils::{Error, ScrapeResult};

#[tokio::main]
async fn main() {
    let config = config::Config::init().expect("Failed to initialize configuration");
    init_logging(&config);

    match run(&config).await {
        Ok(scene_json) => println!("{scene_json}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(config: &crate::config::Config) {
    // stdout is reserved for the scraped JSON; all logging goes to stderr
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: &crate::config::Config) -> ScrapeResult<String> {
    let scene_url = read_fragment_url()?;
    let scene_id = core::scene::scene_id_from_url(&scene_url)?;

    let (record, from_cache) = match core::cache::load(&config.cache.dir, &scene_id)? {
        Some(record) => (record, true),
        None => {
            let api = core::api::SceneApi::new(config.api.clone())?;
            (api.fetch_scene(&scene_id).await?, false)
        }
    };

    let scene = core::normalize::normalize(&record)?;

    if !from_cache && config.cache.write_on_fetch {
        core::cache::save(&config.cache.dir, &scene_id, &record, &scene_url)?;
    }

    Ok(serde_json::to_string(&scene)?)
}

fn read_fragment_url() -> ScrapeResult<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    fragment_url(&input)
}

fn fragment_url(input: &str) -> ScrapeResult<String> {
    let fragment: SceneFragment = serde_json::from_str(input)?;
    fragment
        .url
        .filter(|url| !url.is_empty())
        .ok_or(Error::MissingUrl)
}
