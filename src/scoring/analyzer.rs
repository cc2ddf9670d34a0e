use crate::error::{LeaderboardError, LeaderboardResult};
use crate::scoring::aggregate::build_leaderboard;
use crate::scoring::types::{Leaderboard, RawEntry};
use crate::services::data_provider::DataProvider;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{Instrument, error, info};

/// Runs every provider concurrently and concatenates their entries in
/// provider order.
///
/// All providers must succeed: the first failure to complete aborts the
/// remaining fetches and is returned as-is, so callers never see partial data.
pub async fn ingest(
    providers: Vec<Arc<dyn DataProvider>>,
    concurrency: usize,
) -> LeaderboardResult<Vec<RawEntry>> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut batches: Vec<Option<Vec<RawEntry>>> = vec![None; providers.len()];
    let mut tasks = JoinSet::new();

    for (index, provider) in providers.into_iter().enumerate() {
        let sem = semaphore.clone();
        let span = tracing::info_span!("provide", source = %provider.source());

        tasks.spawn(
            async move {
                let result = match sem.acquire_owned().await {
                    Ok(_permit) => provider.provide().await,
                    Err(e) => Err(LeaderboardError::unavailable(provider.source(), e)),
                };
                (index, result)
            }
            .instrument(span),
        );
    }

    while let Some(joined) = tasks.join_next().await {
        let result = match joined {
            Ok((index, Ok(batch))) => {
                batches[index] = Some(batch);
                continue;
            }
            Ok((_, Err(e))) => e,
            Err(e) => LeaderboardError::unavailable("provider task", e),
        };

        error!(error = %result, "Source failed, aborting ingestion");
        tasks.abort_all();
        return Err(result);
    }

    Ok(batches.into_iter().flatten().flatten().collect())
}

/// Ingests every source and aggregates the combined entries.
#[tracing::instrument(skip(providers), fields(sources = providers.len()))]
pub async fn run(
    providers: Vec<Arc<dyn DataProvider>>,
    concurrency: usize,
) -> LeaderboardResult<Leaderboard> {
    let entries = ingest(providers, concurrency).await?;
    let leaderboard = build_leaderboard(&entries);

    info!(
        entries = leaderboard.entries,
        authors = leaderboard.rows.len(),
        "Leaderboard aggregated"
    );
    Ok(leaderboard)
}
