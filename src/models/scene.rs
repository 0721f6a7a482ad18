use serde::{Deserialize, Serialize};

/// Fragment received on stdin from the scraping frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFragment {
    #[serde(default)]
    pub url: Option<String>,
}

/// Normalized scene schema printed on stdout.
///
/// Field order is part of the contract with the consuming application, as is
/// the distinction between a null field and an omitted one: only `date` is
/// omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapedScene {
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub details: Option<String>,
    pub studio: Studio,
    pub performers: Vec<Performer>,
    pub tags: Vec<Tag>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Studio {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Performer {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
}
