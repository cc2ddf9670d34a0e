use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::LeaderboardResult;
use crate::fetch::{HttpClient, load_source};
use crate::parser::parse_entries;
use crate::scoring::types::RawEntry;
use crate::services::data_provider::DataProvider;

/// Reads a JSON snapshot from disk or from an HTTP(S) URL.
pub struct SnapshotProvider {
    source: String,
    client: Arc<dyn HttpClient>,
}

impl SnapshotProvider {
    pub fn new(source: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            source: source.into(),
            client,
        }
    }
}

#[async_trait]
impl DataProvider for SnapshotProvider {
    fn source(&self) -> &str {
        &self.source
    }

    #[tracing::instrument(skip(self), fields(source = %self.source))]
    async fn provide(&self) -> LeaderboardResult<Vec<RawEntry>> {
        let bytes = load_source(&self.client, &self.source).await?;
        let entries = parse_entries(&self.source, &bytes)?;
        debug!(entries = entries.len(), "Snapshot parsed");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeaderboardError;
    use crate::fetch::BasicClient;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[tokio::test]
    async fn test_reads_local_snapshot() {
        let path = temp_path("leaderboard_snapshot_ok.json");
        fs::write(
            &path,
            r#"[{"author":"A","stage":"Endorsed"},{"author":"B","stage":"Idea","status":"Needs Review"}]"#,
        )
        .unwrap();

        let provider = SnapshotProvider::new(path.clone(), Arc::new(BasicClient::new()));
        let entries = provider.provide().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, "No status");
        assert_eq!(provider.source(), path);

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_ingestion_error() {
        let path = temp_path("leaderboard_snapshot_bad.json");
        fs::write(&path, r#"{"rows": []}"#).unwrap();

        let provider = SnapshotProvider::new(path.clone(), Arc::new(BasicClient::new()));
        let err = provider.provide().await.unwrap_err();
        assert!(matches!(err, LeaderboardError::Ingestion { .. }));

        fs::remove_file(&path).unwrap();
    }
}
