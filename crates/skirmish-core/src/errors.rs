//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::DegenerateReason;

/// A launch request with no valid direction under the firing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("degenerate launch: {reason}")]
pub struct Degenerate {
    pub reason: DegenerateReason,
}

impl Degenerate {
    pub fn not_ahead() -> Self {
        Self {
            reason: DegenerateReason::NotAhead,
        }
    }

    pub fn zero_offset() -> Self {
        Self {
            reason: DegenerateReason::ZeroOffset,
        }
    }
}

/// Failure to load or validate a `SceneConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
