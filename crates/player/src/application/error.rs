//! Service layer error types
//!
//! Errors surfaced to the form layer by the sheet services. Malformed stored
//! data never shows up here: the storage gateway treats it as absent. A
//! failed write does.

use pokerole_domain::ValidationErrors;
use thiserror::Error;

use crate::ports::outbound::StorageError;

/// Errors that can occur in sheet service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// Submitted form input failed validation; nothing was written
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A record could not be turned into stored text
    #[error("Failed to serialize sheet: {0}")]
    Serialization(String),

    /// The backend did not persist the write; the previous value is kept
    #[error("Failed to store sheet: {0}")]
    Storage(String),

    /// The referenced record does not exist in storage
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl SheetError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SheetError::NotFound { .. })
    }

    /// Per-field messages, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SheetError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for SheetError {
    fn from(errors: ValidationErrors) -> Self {
        SheetError::Validation(errors)
    }
}

impl From<StorageError> for SheetError {
    fn from(e: StorageError) -> Self {
        SheetError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::Serialization(e.to_string())
    }
}
