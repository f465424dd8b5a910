//! Error taxonomy shared by stores and controllers.

use thiserror::Error;

/// Result type used across the console layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Console-level error.
///
/// Display strings are user-facing: controllers forward them verbatim to the
/// notification sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No account matches the supplied email/secret pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    #[error("User already exists")]
    EmailAlreadyExists { email: String },

    /// No record with the given id exists in the collection.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Client-side validation rejected the input before any store call.
    #[error("{0}")]
    Validation(String),

    /// Catch-all for unexpected failures during create/update/delete.
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn email_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn operation_failed(msg: impl Into<String>) -> Self {
        Self::OperationFailed(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
