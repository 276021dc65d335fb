//! Error types and result handling for the exception reporter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for report generation and delivery.
#[derive(Error, Debug)]
pub enum Error {
    // ===== I/O Errors =====
    #[error("Unable to save file '{path}'")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(String),

    // ===== Configuration Errors =====
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Invalid configuration value: {field} - {message}")]
    ConfigInvalid { field: String, message: String },

    #[error("Email report address is not configured")]
    MissingContactAddress,

    // ===== Delivery Errors =====
    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: String, reason: String },

    #[error("Web service at {url} responded with status {status}")]
    WebServiceStatus { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    // ===== External Process Errors =====
    #[error("Unable to launch '{target}': {reason}")]
    Launch { target: String, reason: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ===== Platform Errors =====
    #[error("System information collection failed: {0}")]
    SysInfo(String),

    #[error("Operation not supported: {0}")]
    NotSupported(String),

    // ===== Serialization Errors =====
    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl Error {
    /// Create a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a channel delivery error.
    pub fn delivery(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Delivery {
            channel: channel.into(),
            reason: reason.into(),
        }
    }

    /// Create an external launch error.
    pub fn launch(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Launch {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised before any delivery was attempted.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// Get a user-friendly suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::FileWrite { .. } => Some("Check that the folder exists and is writable"),
            Error::ConfigLoad(_) | Error::ConfigInvalid { .. } => {
                Some("Check your configuration file for syntax errors or missing fields")
            }
            Error::MissingContactAddress => {
                Some("Set 'email_report_address' in the reporter configuration")
            }
            Error::Delivery { .. } | Error::NotSupported(_) => {
                Some("Save the report to a file or copy it and send it manually")
            }
            Error::WebServiceStatus { .. } | Error::Network(_) => {
                Some("Check your network connection and try again")
            }
            Error::Launch { .. } => {
                Some("Make sure a default mail client or browser is registered")
            }
            _ => None,
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::FileWrite { .. } | Error::Io(_) => ErrorCategory::Io,

            Error::ConfigLoad(_)
            | Error::ConfigSave(_)
            | Error::ConfigInvalid { .. }
            | Error::MissingContactAddress => ErrorCategory::Configuration,

            Error::Delivery { .. } => ErrorCategory::Delivery,

            Error::WebServiceStatus { .. } | Error::Network(_) => ErrorCategory::Network,

            Error::Launch { .. } | Error::Clipboard(_) => ErrorCategory::External,

            Error::SysInfo(_) | Error::NotSupported(_) => ErrorCategory::Platform,

            Error::JsonSerialize(_) => ErrorCategory::Serialization,

            Error::Other(_) => ErrorCategory::Other,
        }
    }
}

/// Error category for classification and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Delivery,
    Network,
    External,
    Platform,
    Serialization,
    Other,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io => write!(f, "I/O"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Delivery => write!(f, "Delivery"),
            Self::Network => write!(f, "Network"),
            Self::External => write!(f, "External"),
            Self::Platform => write!(f, "Platform"),
            Self::Serialization => write!(f, "Serialization"),
            Self::Other => write!(f, "Other"),
        }
    }
}
