//! Error types for placeholder filling

use std::path::PathBuf;
use thiserror::Error;

/// Errors with a meaningful kind for callers
///
/// Everything here is fatal: these surface before interactive state has
/// accumulated, so the run terminates without prompting or writing.
#[derive(Debug, Error)]
pub enum FillinError {
    #[error("invalid key pattern `{pattern}`: {source}")]
    KeyPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("{}: expected a flat key-value mapping", .path.display())]
    DataShape { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FillinError {
    pub fn key_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::KeyPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    pub fn data_shape(path: impl Into<PathBuf>) -> Self {
        Self::DataShape { path: path.into() }
    }
}
