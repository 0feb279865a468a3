//! Error types for Tumblr API calls.
//!
//! Every failure is returned to the immediate caller. Nothing is retried or
//! swallowed, and decode failures keep the raw body, status and headers so the
//! HTTP round trip can still be inspected.

use http::{HeaderMap, StatusCode};

/// The main error type for Tumblr API calls.
///
/// # Examples
///
/// ```no_run
/// use tumblr::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new()?;
///
/// match client.get::<serde_json::Value>("blog/staff.tumblr.com/info").await {
///     Ok(response) => println!("Meta: {:?}", response.meta),
///     Err(Error::DeserializationFailed { raw_response, serde_error, .. }) => {
///         eprintln!("Failed to deserialize. Raw response: {}", raw_response);
///         eprintln!("Serde error: {}", serde_error);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The resource path (or a configured base URL) is not a valid URL reference.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The transport request could not be assembled from the resolved URL,
    /// method, headers and body.
    #[error("Failed to build request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// A network-level error occurred (connection failed, DNS lookup failed,
    /// timeout, body read failure).
    ///
    /// This is the transport's error, passed through unchanged.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not a valid envelope for the requested payload type.
    ///
    /// The round trip itself succeeded, so the HTTP status, headers and raw body
    /// are preserved.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
        /// The response headers
        headers: HeaderMap,
    },

    /// The envelope reported a non-2xx outcome.
    ///
    /// Only produced by [`Response::error_for_status`](crate::Response::error_for_status);
    /// dispatch itself never gates on status.
    #[error("API error {status}: {msg}")]
    Api {
        /// The status carried in the envelope's `meta` block
        status: i32,
        /// The message carried in the envelope's `meta` block
        msg: String,
        /// The HTTP status code of the response
        http_status: StatusCode,
    },

    /// A blog identifier that is not a single path segment, such as one
    /// containing `/`, `?`, `#`, `%`, or a dot segment.
    #[error("Invalid blog identifier: {0:?}")]
    InvalidBlogIdentifier(String),

    /// The envelope decoded but carried no `response` payload.
    #[error("Response envelope has no payload")]
    MissingPayload,

    /// Invalid configuration was provided to the [`ClientBuilder`](crate::ClientBuilder).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::DeserializationFailed { status, .. } => Some(*status),
            Error::Api { http_status, .. } => Some(*http_status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Tumblr API calls.
pub type Result<T> = std::result::Result<T, Error>;
