//! Error types shared across the folio crates.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the folio application.
///
/// Every variant is recoverable by the caller: the core never
/// terminates on these, each call site decides user-facing messaging.
#[derive(Error, Debug, Clone, Serialize)]
pub enum FolioError {
    /// A field value failed validation (empty text, level out of range)
    #[error("Validation error: {field} - {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Entity not found with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Credentials did not match any known account
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Username already taken at registration
    #[error("Username already taken: '{username}'")]
    DuplicateUser { username: String },

    /// Mutation attempted without an authenticated session
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Workflow state conflict (e.g. a second edit opened on a row)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Creates a Validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a DuplicateUser error
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }

    /// Creates a Permission error
    pub fn permission(message: impl Into<String>) -> Self {
        Self::Permission(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Check if this is a DuplicateUser error
    pub fn is_duplicate_user(&self) -> bool {
        matches!(self, Self::DuplicateUser { .. })
    }

    /// Check if this is a Permission error
    pub fn is_permission(&self) -> bool {
        matches!(self, Self::Permission(_))
    }

    /// Check if this is a Conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;
