//! Error types for the Recognize client.
//!
//! All fallible operations return [`RecognizeError`], which follows a small
//! number of rules:
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Preserve error chains with `#[source]` attributes
//! - Include context in error messages (paths, endpoints, status codes)
//!
//! **System errors MUST always bubble up unchanged:**
//! - `RecognizeError::Io` (from `std::io::Error`) - file system errors,
//!   permission errors. Never wrap or suppress these.
//!
//! **Application errors are wrapped with context:**
//! - `Validation` - invalid input (empty image data, bad configuration)
//! - `Transport` - network failures reaching the endpoint
//! - `Remote` - the endpoint answered with a non-success HTTP status
//! - `ResponseFormat` - the response body is not valid JSON
//!
//! No error is ever retried or swallowed; the caller decides what to do.
use thiserror::Error;

/// Result type alias using `RecognizeError`.
pub type Result<T> = std::result::Result<T, RecognizeError>;

/// Main error type for all Recognize operations.
///
/// # Variants
///
/// - `Io` - file system and I/O errors (always bubble up)
/// - `Validation` - input validation errors (empty image, invalid config)
/// - `Transport` - connection, DNS, and timeout failures
/// - `Remote` - non-2xx HTTP status from the recognition service
/// - `ResponseFormat` - response body that is not well-formed JSON
#[derive(Debug, Error)]
pub enum RecognizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Remote error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Response format error: {message}")]
    ResponseFormat {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RecognizeError {
    /// Create a Validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Transport error with source
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a ResponseFormat error
    pub fn response_format<S: Into<String>>(message: S) -> Self {
        Self::ResponseFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Create a ResponseFormat error with source
    pub fn response_format_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ResponseFormat {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
