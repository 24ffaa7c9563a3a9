//! Articles as seen by the list, and the data contract used to hand them over from the page.
//!
//! The hosting page serializes the entries as a JSON array into the `data-entries` attribute of the list element:
//! ```json
//! [
//!   { "slug": "intro", "data": { "title": "Intro" } },
//!   { "slug": "advanced-topics", "data": { "title": "Advanced Topics" } }
//! ]
//! ```
//! `id` is accepted in place of `slug`, and any other field is ignored, so that the page can pass richer entries.
use serde::{Deserialize, Serialize};

use crate::errors::InitializationError;

/// A single article in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedEntry", into = "SerializedEntry")]
pub struct Entry {
    /// Unique, stable identifier of the article. Used to find its list item on the page.
    pub slug: String,
    pub title: String,
}

impl Entry {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// Whether the title contains `needle`. `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

#[derive(Serialize, Deserialize)]
struct SerializedEntry {
    #[serde(alias = "id")]
    slug: String,
    data: SerializedEntryData,
}

#[derive(Serialize, Deserialize)]
struct SerializedEntryData {
    title: String,
}

impl From<SerializedEntry> for Entry {
    fn from(entry: SerializedEntry) -> Self {
        Self {
            slug: entry.slug,
            title: entry.data.title,
        }
    }
}

impl From<Entry> for SerializedEntry {
    fn from(entry: Entry) -> Self {
        Self {
            slug: entry.slug,
            data: SerializedEntryData { title: entry.title },
        }
    }
}

/// Parse the entries attached to the hosting element.
///
/// An absent or blank attribute is reported as [`InitializationError::MissingEntries`], anything that isn't an array
/// of entries as [`InitializationError::MalformedEntries`].
pub fn parse_entries(raw: Option<&str>) -> Result<Vec<Entry>, InitializationError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(InitializationError::MissingEntries),
    };

    serde_json::from_str(raw).map_err(|source| InitializationError::MalformedEntries { source })
}

/// Serialize entries into the format expected by [`parse_entries`].
pub fn serialize_entries(entries: &[Entry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Entries whose title contains `query`, ignoring case. The order of `entries` is preserved.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = query.to_lowercase();

    entries.iter().filter(|entry| entry.matches(&needle)).collect()
}
