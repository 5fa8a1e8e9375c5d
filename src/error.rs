//! Error types for the Pulsewatch client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The client performs no local recovery: transport and decode failures
//! surface to the caller verbatim, and a failure on any page of a paginated
//! listing aborts the whole call with no partial results.

use thiserror::Error;

/// The main error type for the Pulsewatch client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The HTTP collaborator failed to complete the request
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the server
        body: String,
    },

    /// The request URL could not be built, e.g. no base URL was configured
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The response body did not match the expected wrapper shape
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What the decoder rejected
        message: String,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// A listing hit the opt-in page ceiling before the server stopped
    /// issuing next links
    #[error("Pagination exceeded the configured limit of {limit} pages")]
    PageLimitExceeded {
        /// The configured ceiling
        limit: u32,
    },
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The HTTP status code this error carries, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a 404 from the remote API
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for the Pulsewatch client
pub type Result<T> = std::result::Result<T, Error>;
