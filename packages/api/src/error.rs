use thiserror::Error;

/// Failure of a single remote operation.
///
/// Every operation is one network round trip with no retry; the caller
/// logs the error and leaves UI state unchanged rather than trying again.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16 },
    /// The collection endpoint answered with something that is not JSON.
    #[error("expected a JSON response, got {content_type:?}")]
    UnexpectedContentType { content_type: Option<String> },
    /// Transport-level failure (DNS, connection refused, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The body did not decode into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
