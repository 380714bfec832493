use reqwest::StatusCode;

/// Classification of search API failures.
///
/// Every failure of a search call falls into exactly one of these kinds.
/// All of them are terminal for this single-shot client; nothing here is
/// retried.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure: DNS resolution, connection, TLS, or timeout
    Transport(reqwest::Error),
    /// The API answered with a non-success HTTP status
    Request { status: StatusCode },
    /// The response body was not valid JSON or did not match the schema
    Decode(serde_json::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "search request failed: {}", err),
            Self::Request { status } => write!(f, "search query failed: {}", status),
            Self::Decode(err) => write!(f, "malformed search response: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Request { .. } => None,
            Self::Decode(err) => Some(err),
        }
    }
}
