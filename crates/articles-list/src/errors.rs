//! Error types for the articles list.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

/// Raised when a list cannot be constructed from its hosting element.
///
/// This is the only failure the list knows about: once constructed, every transition works on validated in-memory
/// state.
#[derive(Error)]
pub enum InitializationError {
    #[error("Invalid articles entries: the hosting element has no `data-entries` attribute")]
    MissingEntries,

    #[error("Invalid articles entries: `data-entries` could not be parsed")]
    MalformedEntries {
        #[source]
        source: serde_json::Error,
    },
}

impl Debug for InitializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Errors end up printed through Debug in the browser console, keep the readable message.
        match self {
            Self::MalformedEntries { source } => write!(f, "{} ({})", self, source),
            _ => write!(f, "{}", self),
        }
    }
}
