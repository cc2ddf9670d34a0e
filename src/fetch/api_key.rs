use super::client::HttpClient;
use crate::error::{LeaderboardError, LeaderboardResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// An [`HttpClient`] wrapper that sends `Authorization: Bearer <key>` with
/// every request, for snapshot endpoints that are not public.
pub struct ApiKey<C> {
    inner: C,
    value: HeaderValue,
}

impl<C> ApiKey<C> {
    /// Fails if `key` contains characters that are not valid in a header.
    pub fn bearer(inner: C, key: &str) -> LeaderboardResult<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| LeaderboardError::InvalidArgument(format!("bearer token: {e}")))?;
        value.set_sensitive(true);
        Ok(Self { inner, value })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().insert(AUTHORIZATION, self.value.clone());
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;

    #[test]
    fn test_bearer_rejects_newline() {
        assert!(ApiKey::bearer(BasicClient::new(), "abc\ndef").is_err());
    }

    #[test]
    fn test_bearer_marks_value_sensitive() {
        let client = ApiKey::bearer(BasicClient::new(), "token").unwrap();
        assert!(client.value.is_sensitive());
        assert_eq!(client.value.to_str().unwrap(), "Bearer token");
    }
}
