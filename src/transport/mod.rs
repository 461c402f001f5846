pub mod error;

use log::{debug, warn};
use reqwest::Client;

use self::error::TransportError;

/// Default number of attempts per request, matching the behavior of
/// retrying a flaky weather endpoint a few times before giving up.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Thin wrapper around a [`reqwest::Client`] that appends the API key
/// and retries transient failures.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    api_key: Option<String>,
    attempts: u32,
}

impl HttpTransport {
    pub fn new(api_key: Option<String>, attempts: Option<u32>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            attempts: attempts.unwrap_or(DEFAULT_ATTEMPTS).max(1),
        }
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// Network errors and 5xx responses are retried up to the attempt
    /// budget; a 4xx fails immediately since repeating the same bad
    /// request cannot help.
    pub async fn get(&self, url: &str) -> Result<String, TransportError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.get_once(url).await {
                Ok(body) => {
                    debug!("GET {url} succeeded on attempt {attempt}");
                    return Ok(body);
                }
                Err(err) if err.is_retryable() && attempt < self.attempts => {
                    warn!("GET {url} failed on attempt {attempt}, retrying: {err}");
                }
                Err(err) if err.is_retryable() => {
                    return Err(TransportError::RetriesExhausted {
                        url: url.to_string(),
                        attempts: self.attempts,
                        last: Box::new(err),
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once(&self, url: &str) -> Result<String, TransportError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(url.to_string(), e))?;
        let response = response
            .error_for_status()
            .map_err(|e| TransportError::HttpStatus {
                url: url.to_string(),
                status: e.status().unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                source: e,
            })?;
        response
            .text()
            .await
            .map_err(|e| TransportError::Body(url.to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on this port, so every attempt fails at connect.
    const DEAD_URL: &str = "http://127.0.0.1:9/find/station";

    #[test]
    fn attempt_budget_has_a_floor_of_one() {
        let transport = HttpTransport::new(None, Some(0));
        assert_eq!(transport.attempts, 1);
        let transport = HttpTransport::new(None, None);
        assert_eq!(transport.attempts, DEFAULT_ATTEMPTS);
    }

    #[tokio::test]
    async fn connect_failures_exhaust_the_retry_budget() {
        let transport = HttpTransport::new(None, Some(2));
        let err = transport.get(DEAD_URL).await.unwrap_err();
        match err {
            TransportError::RetriesExhausted { url, attempts, last } => {
                assert_eq!(url, DEAD_URL);
                assert_eq!(attempts, 2);
                assert!(matches!(*last, TransportError::Network(..)));
            }
            other => panic!("expected RetriesExhausted, got {other:?}"),
        }
    }
}
