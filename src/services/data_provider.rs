//! Trait for anything that can supply raw leaderboard entries.

use crate::error::LeaderboardResult;
use crate::scoring::types::RawEntry;

/// A source of raw `(author, stage, status)` observations.
///
/// Implementations either return the complete entry list for their source or
/// fail; they never return partial data.
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Human-readable origin used in logs and errors.
    fn source(&self) -> &str;

    async fn provide(&self) -> LeaderboardResult<Vec<RawEntry>>;
}
