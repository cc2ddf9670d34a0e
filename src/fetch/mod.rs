//! HTTP access for remote leaderboard sources.

mod api_key;
mod basic;
mod client;

pub use api_key::ApiKey;
pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::{LeaderboardError, LeaderboardResult};
use std::sync::Arc;

/// Fetches `url` and returns the response body.
///
/// Transport errors and non-success statuses are reported as
/// [`LeaderboardError::SourceUnavailable`].
#[tracing::instrument(skip(client))]
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: &str) -> LeaderboardResult<Vec<u8>> {
    let parsed = url
        .parse::<reqwest::Url>()
        .map_err(|e| LeaderboardError::unavailable(url, format!("invalid url: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client
        .execute(req)
        .await
        .map_err(|e| LeaderboardError::unavailable(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LeaderboardError::unavailable(url, format!("HTTP {status}")));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| LeaderboardError::unavailable(url, e))?;
    tracing::debug!(bytes = bytes.len(), "Source body received");
    Ok(bytes.to_vec())
}

/// Loads a source from a local path, or over HTTP when it looks like a URL.
pub async fn load_source(client: &Arc<dyn HttpClient>, source: &str) -> LeaderboardResult<Vec<u8>> {
    if is_remote(source) {
        fetch_bytes(client.as_ref(), source).await
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|e| LeaderboardError::unavailable(source, e))
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Builds the shared client, adding bearer auth when a token is supplied.
pub fn build_client(token: Option<&str>) -> LeaderboardResult<Arc<dyn HttpClient>> {
    match token {
        Some(key) if !key.is_empty() => Ok(Arc::new(ApiKey::bearer(BasicClient::new(), key)?)),
        _ => Ok(Arc::new(BasicClient::new())),
    }
}
