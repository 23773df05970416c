//! Event model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::FrontMatter;
use crate::helpers::parse_date_string;

/// One event, loaded from one content file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Filename with a trailing `.md` removed
    pub slug: String,

    /// Event title
    pub title: Option<String>,

    /// Short description shown on the card
    pub description: Option<String>,

    /// Venue or "Online"
    pub location: Option<String>,

    /// Image URL or path, passed through untouched
    pub thumbnail: Option<String>,

    /// Raw date string as authored
    pub date: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl EventRecord {
    /// Build a record from a file name and its parsed front-matter
    pub fn new(file_name: &str, fm: FrontMatter) -> Self {
        let mut extra = fm.extra;
        // The filename owns the slug
        extra.remove("slug");

        Self {
            slug: slug_from_filename(file_name),
            title: fm.title,
            description: fm.description,
            location: fm.location,
            thumbnail: fm.thumbnail,
            date: fm.date,
            extra,
        }
    }

    /// Parsed date, or None when absent or unparseable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Derive a slug by stripping a literal `.md` suffix.
///
/// Not extension-aware: `notes.markdown` and `.md.bak` names stay as they
/// are.
pub fn slug_from_filename(file_name: &str) -> String {
    file_name
        .strip_suffix(".md")
        .unwrap_or(file_name)
        .to_string()
}
