use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{LeaderboardError, LeaderboardResult};
use crate::fetch::{HttpClient, load_source};
use crate::html::{ScrapedRow, TableColumns, scrape_table, validate_fraction};
use crate::scoring::types::RawEntry;
use crate::services::data_provider::DataProvider;

/// Scrapes entries out of an HTML page that renders the submissions table.
pub struct HtmlTableProvider {
    source: String,
    fraction: f64,
    columns: TableColumns,
    client: Arc<dyn HttpClient>,
}

impl HtmlTableProvider {
    pub fn new(
        source: impl Into<String>,
        fraction: f64,
        columns: TableColumns,
        client: Arc<dyn HttpClient>,
    ) -> LeaderboardResult<Self> {
        Ok(Self {
            source: source.into(),
            fraction: validate_fraction(fraction)?,
            columns,
            client,
        })
    }

    /// Returns the rows as they appear on the page, without status defaulting.
    #[tracing::instrument(skip(self), fields(source = %self.source, fraction = self.fraction))]
    pub async fn scrape(&self) -> LeaderboardResult<Vec<ScrapedRow>> {
        let bytes = load_source(&self.client, &self.source).await?;
        let html = String::from_utf8(bytes)
            .map_err(|e| LeaderboardError::ingestion(&self.source, format!("not UTF-8: {e}")))?;

        let rows = scrape_table(&html, self.fraction, &self.columns);
        if rows.is_empty() {
            warn!("No table rows found");
        }
        debug!(rows = rows.len(), "Table scraped");
        Ok(rows)
    }
}

#[async_trait]
impl DataProvider for HtmlTableProvider {
    fn source(&self) -> &str {
        &self.source
    }

    async fn provide(&self) -> LeaderboardResult<Vec<RawEntry>> {
        Ok(self
            .scrape()
            .await?
            .into_iter()
            .map(|row| RawEntry::new(row.author, row.stage, Some(&row.status)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;
    use std::env;
    use std::fs;

    #[test]
    fn test_rejects_fraction_out_of_range() {
        let result = HtmlTableProvider::new(
            "page.html",
            2.0,
            TableColumns::default(),
            Arc::new(BasicClient::new()),
        );
        assert!(matches!(result, Err(LeaderboardError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_provide_defaults_empty_status() {
        let path = format!("{}/leaderboard_table.html", env::temp_dir().display());
        fs::write(
            &path,
            "<table><tr><th>Author</th><th>Stage</th><th>Status</th></tr>\
             <tr><td>Ada</td><td>Endorsed</td><td></td></tr>\
             <tr><td>Bob</td><td>Idea</td><td>Awaiting Feedback</td></tr></table>",
        )
        .unwrap();

        let columns = TableColumns {
            author: 0,
            stage: 1,
            status: 2,
        };
        let provider =
            HtmlTableProvider::new(path.clone(), 1.0, columns, Arc::new(BasicClient::new()))
                .unwrap();

        let raw = provider.scrape().await.unwrap();
        assert_eq!(raw[0].status, "");

        let entries = provider.provide().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, "No status");
        assert_eq!(entries[1].status, "Awaiting Feedback");

        fs::remove_file(&path).unwrap();
    }
}
