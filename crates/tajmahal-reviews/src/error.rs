//! Review error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted review was not accepted into the store.
///
/// Both kinds are recoverable: the caller shows them as feedback and the
/// store is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Comment missing, empty, or whitespace only.
    #[error("review comment is empty")]
    EmptyComment,

    /// Rate outside the closed range 1..=5.
    #[error("review rating must be between 1 and 5")]
    InvalidRating,
}

impl RejectionReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyComment => "empty_comment",
            Self::InvalidRating => "invalid_rating",
        }
    }
}

/// Errors that can occur while loading seed data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid JSON.
    #[error("Failed to parse JSON seed {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The seed file is not valid TOML.
    #[error("Failed to parse TOML seed {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
