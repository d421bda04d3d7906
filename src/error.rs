//! Error types for pricing and QR handling.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse error classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Caller input is out of range (chair count, negative amounts).
    ValidationError,
    /// A lookup into the pricing tables missed, or the tables are malformed.
    ConfigurationError,
    /// Reading a tables file failed.
    IoError,
}

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum ChairCareError {
    #[error("Unknown service type: {name}")]
    UnknownServiceType { name: String },

    #[error("Unknown additional service: {key}")]
    UnknownAddOn { key: String },

    #[error("Unknown travel tier: {name}")]
    UnknownTravelTier { name: String },

    #[error("Unknown urgency: {name}")]
    UnknownUrgency { name: String },

    #[error("Invalid pricing request: {message}")]
    Validation { message: String },

    #[error("Amount overflow while computing {component}")]
    AmountOverflow { component: String },

    #[error("Invalid pricing tables: {message}")]
    InvalidTables { message: String },

    #[error("Failed to parse pricing tables: {0}")]
    TablesFormat(#[from] serde_json::Error),

    #[error("Tables file not found: {path}")]
    TablesNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChairCareError {
    /// Get the error class for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChairCareError::UnknownServiceType { .. } => ErrorCode::ConfigurationError,
            ChairCareError::UnknownAddOn { .. } => ErrorCode::ConfigurationError,
            ChairCareError::UnknownTravelTier { .. } => ErrorCode::ConfigurationError,
            ChairCareError::UnknownUrgency { .. } => ErrorCode::ConfigurationError,
            ChairCareError::Validation { .. } => ErrorCode::ValidationError,
            ChairCareError::AmountOverflow { .. } => ErrorCode::ValidationError,
            ChairCareError::InvalidTables { .. } => ErrorCode::ConfigurationError,
            ChairCareError::TablesFormat(_) => ErrorCode::ConfigurationError,
            ChairCareError::TablesNotFound { .. } => ErrorCode::IoError,
            ChairCareError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Whether this error comes from bad caller input rather than bad configuration.
    pub fn is_validation(&self) -> bool {
        self.code() == ErrorCode::ValidationError
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, ChairCareError>;
