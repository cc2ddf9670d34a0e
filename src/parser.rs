//! JSON parser for leaderboard snapshots.

use serde::Deserialize;

use crate::error::{LeaderboardError, LeaderboardResult};
use crate::scoring::types::RawEntry;

/// Entry shape as it appears in snapshot files and scrape output.
#[derive(Deserialize)]
struct SnapshotEntry {
    author: String,
    stage: String,
    #[serde(default)]
    status: Option<String>,
}

/// Decodes a JSON array of `{author, stage, status?}` objects.
///
/// # Errors
///
/// Returns [`LeaderboardError::Ingestion`] if the payload is empty or is not
/// an array of objects with string `author` and `stage` fields.
pub fn parse_entries(source: &str, bytes: &[u8]) -> LeaderboardResult<Vec<RawEntry>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LeaderboardError::ingestion(source, "empty payload"));
    }

    let entries: Vec<SnapshotEntry> =
        serde_json::from_slice(bytes).map_err(|e| LeaderboardError::ingestion(source, e))?;

    Ok(entries
        .into_iter()
        .map(|e| RawEntry::new(e.author, e.stage, e.status.as_deref()))
        .collect())
}
