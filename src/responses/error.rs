use thiserror::Error;

/// Failure to map a response body.
///
/// Only a structurally invalid document is an error; everything past the
/// top level is mapped best-effort (missing keys become `None`, malformed
/// list elements are skipped, unknown enum strings become `Unknown`).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response body is not valid JSON")]
    Json(#[from] serde_json::Error),
}
