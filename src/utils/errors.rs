//! Error handling for Folio
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for Folio
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Translation resource error: {0}")]
    Resource(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid translation table: {0}")]
    InvalidTable(String),

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Translation fetch timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FolioError::Resource(_) => true,
            FolioError::Http(_) => true,
            FolioError::Serialization(_) => false,
            FolioError::Io(_) => true,
            FolioError::UrlParse(_) => false,
            FolioError::Config(_) => false,
            FolioError::InvalidTable(_) => false,
            FolioError::UnsupportedLanguage { .. } => true,
            FolioError::Storage(_) => true,
            FolioError::InvalidStateTransition { .. } => false,
            FolioError::Timeout { .. } => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FolioError::Config(_) => ErrorSeverity::Critical,
            FolioError::UnsupportedLanguage { .. } => ErrorSeverity::Warning,
            FolioError::Storage(_) => ErrorSeverity::Warning,
            FolioError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
