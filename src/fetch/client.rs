use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes HTTP requests for remote leaderboard sources.
///
/// Wrappers such as [`ApiKey`](super::ApiKey) decorate a request before
/// handing it to an inner client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
