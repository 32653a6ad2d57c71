//! Error types for the citation harvester.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Transport failures never escape a fetcher; only [`HarvestFailure`] stops a paper.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed URL handed back by a service
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Rate limited by the service (429 response)
    #[error("Rate limited by the service (429)")]
    RateLimited,

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Fatal outcomes for a single paper.
///
/// These are reported, not raised: the harvest for that paper stops and the
/// batch carries on.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestFailure {
    /// No DOI was supplied and none could be resolved from the title.
    #[error("could not resolve a DOI")]
    UnresolvableIdentity,

    /// The DOI has no Semantic Scholar paper id.
    #[error("no Semantic Scholar paper id for DOI")]
    UnresolvableCrossReference,
}

/// Errors from writing harvest artifacts.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_messages() {
        assert!(ClientError::RateLimited.to_string().contains("429"));
        assert!(ClientError::not_found("paper").to_string().contains("paper"));
        assert!(ClientError::server(503, "down").to_string().contains("503"));
        assert!(ClientError::Timeout(Duration::from_secs(30)).to_string().contains("30s"));
    }

    #[test]
    fn test_harvest_failure_display() {
        assert_eq!(HarvestFailure::UnresolvableIdentity.to_string(), "could not resolve a DOI");
        assert!(HarvestFailure::UnresolvableCrossReference.to_string().contains("paper id"));
    }
}
