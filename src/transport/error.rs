use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body for {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Request for {url} still failing after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<TransportError>,
    },
}

impl TransportError {
    /// Server-side and network failures are worth retrying; client
    /// errors are not going to pass on a second attempt.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            Self::Network(..) | Self::Body(..) => true,
            Self::HttpStatus { status, .. } => status.is_server_error(),
            Self::RetriesExhausted { .. } => false,
        }
    }
}
