// Error types for SubRun
//
// Structured error types using thiserror. Network and resolution failures are
// mostly absorbed inside the pipeline; the variants here cover what can still
// reach a caller (configuration, input files, output writers, CT queries).

use std::io;
use thiserror::Error;

/// Main error type for SubRun operations
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// HTTP endpoint answered with a non-success status
    #[error("HTTP error (status {status}): {details}")]
    HttpError { status: u16, details: String },

    /// Reqwest HTTP client errors
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Parsing error for upstream data
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// A single lookup strategy could not resolve the hostname
    #[error("DNS resolution failed for {hostname}: {details}")]
    DnsResolutionFailed { hostname: String, details: String },

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// Invalid input from user
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl DiscoveryError {
    /// Shorthand for a file system error carrying the offending path
    pub fn fs(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        DiscoveryError::FileSystemError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<std::string::FromUtf8Error> for DiscoveryError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DiscoveryError::ParseError {
            message: format!("UTF-8 conversion error: {}", err),
        }
    }
}

impl<W> From<csv::IntoInnerError<W>> for DiscoveryError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        DiscoveryError::IoError {
            source: io::Error::other(format!("CSV writer error: {}", err)),
        }
    }
}

/// Helper macro for early returns with a formatted `DiscoveryError::Other`
#[macro_export]
macro_rules! discovery_bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::DiscoveryError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::DiscoveryError::Other(format!($fmt, $($arg)*)))
    };
}
