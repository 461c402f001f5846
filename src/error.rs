use crate::responses::error::ParseError;
use crate::transport::error::TransportError;
use thiserror::Error;

/// Top-level error type returned by [`crate::OwmClient`] methods.
#[derive(Debug, Error)]
pub enum OwmError {
    #[error("Invalid base URL '{0}'")]
    BaseUrl(String, #[source] url::ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
