//! Error types for loading and publishing a leaderboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The source could not be read or fetched.
    #[error("source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// The source was retrieved but its payload has the wrong shape.
    #[error("source '{source_name}' is not a valid entry list: {reason}")]
    Ingestion { source_name: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

impl LeaderboardError {
    pub fn unavailable(source_name: &str, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn ingestion(source_name: &str, reason: impl ToString) -> Self {
        Self::Ingestion {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Both load failures collapse into the same "try again later" state.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::Ingestion { .. }
        )
    }
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
