//! Concrete [`DataProvider`](crate::services::data_provider::DataProvider) implementations.

mod html_table;
mod snapshot;

pub use html_table::HtmlTableProvider;
pub use snapshot::SnapshotProvider;

use std::sync::Arc;

use crate::error::{LeaderboardError, LeaderboardResult};
use crate::fetch::HttpClient;
use crate::html::{TableColumns, validate_fraction};
use crate::services::data_provider::DataProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceKind {
    /// JSON array of `{author, stage, status}` objects
    Snapshot,
    /// HTML page containing the submissions table
    HtmlTable,
}

/// Builds one provider per source, all of the same kind.
///
/// `fraction` must lie in `[0, 1]`, and only table sources accept a value
/// other than 1.
pub fn build_providers(
    sources: &[String],
    kind: SourceKind,
    fraction: f64,
    client: &Arc<dyn HttpClient>,
) -> LeaderboardResult<Vec<Arc<dyn DataProvider>>> {
    let fraction = validate_fraction(fraction)?;
    if kind == SourceKind::Snapshot && fraction != 1.0 {
        return Err(LeaderboardError::InvalidArgument(
            "fraction only applies to html-table sources".to_string(),
        ));
    }

    sources
        .iter()
        .map(|source| -> LeaderboardResult<Arc<dyn DataProvider>> {
            let provider: Arc<dyn DataProvider> = match kind {
                SourceKind::Snapshot => {
                    Arc::new(SnapshotProvider::new(source.clone(), client.clone()))
                }
                SourceKind::HtmlTable => Arc::new(HtmlTableProvider::new(
                    source.clone(),
                    fraction,
                    TableColumns::default(),
                    client.clone(),
                )?),
            };
            Ok(provider)
        })
        .collect()
}
