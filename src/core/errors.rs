//! Custom error types for translator service calls

use thiserror::Error;

/// Errors raised by the Language Translator client
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// The service answered with a non-2xx status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Caller passed an unusable combination of arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
    },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField {
        field: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        path: String,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslatorError {
    /// HTTP status of an [`ApiError`](Self::ApiError), if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslatorError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        TranslatorError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TranslatorError::ConfigError {
            message: message.into(),
        }
    }

    /// Classify a transport failure from reqwest
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslatorError::TimeoutError
        } else {
            TranslatorError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

impl From<config::ConfigError> for TranslatorError {
    fn from(err: config::ConfigError) -> Self {
        TranslatorError::config(err.to_string())
    }
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = TranslatorError::ApiError {
            status: 404,
            message: "Model not found".to_string(),
            body: None,
        };
        assert_eq!(err.to_string(), "API error: 404 - Model not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(TranslatorError::TimeoutError.status(), None);
        assert_eq!(
            TranslatorError::missing("text").to_string(),
            "Missing required field: text"
        );
    }
}
