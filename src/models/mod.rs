mod scene;

pub use scene::{Performer, SceneFragment, ScrapedScene, Studio, Tag};
