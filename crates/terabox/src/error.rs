use reqwest::StatusCode;

/// Failure while talking to the resolver API
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The upstream host could not be reached or the body could not be read
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The upstream answered with a non-success status
    #[error("upstream returned HTTP {status}")]
    Http { status: StatusCode },
    /// The body was not JSON or did not have the expected shape
    #[error("unexpected response body: {0}")]
    Parse(String),
}

