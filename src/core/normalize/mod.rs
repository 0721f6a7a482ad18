use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{Performer, ScrapedScene, Studio, Tag};
use crate::utils::{Error, ScrapeResult};

static TIME_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"T.+").unwrap());

fn str_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// `publishedDate` truncated to its calendar-date part and re-serialized as
/// `YYYY-MM-DD`. Absent or empty source dates normalize to `None`; a date
/// part that is present but malformed is fatal.
fn published_date(record: &Value) -> ScrapeResult<Option<String>> {
    let Some(raw) = str_field(record, "publishedDate").filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let date_part = TIME_SUFFIX_RE.replace(&raw, "").into_owned();
    let date = chrono::NaiveDate::parse_from_str(&date_part, "%Y-%m-%d")
        .map_err(|source| Error::InvalidDate { date: date_part, source })?;
    Ok(Some(date.format("%Y-%m-%d").to_string()))
}

/// Map a raw backend record into the fixed output schema. Missing lists
/// become empty lists, every other missing leaf stays null.
pub fn normalize(record: &Value) -> ScrapeResult<ScrapedScene> {
    let performers = record
        .get("models")
        .and_then(Value::as_array)
        .map(|models| {
            models
                .iter()
                .map(|m| Performer { name: str_field(m, "modelName") })
                .collect()
        })
        .unwrap_or_default();

    let tags = record
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(|t| Tag { name: t.to_string() })
                .collect()
        })
        .unwrap_or_default();

    Ok(ScrapedScene {
        title: str_field(record, "title"),
        date: published_date(record)?,
        details: str_field(record, "description"),
        studio: Studio {
            name: record
                .get("site")
                .and_then(|site| site.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        performers,
        tags,
        image: str_field(record, "img"),
    })
}
