//! Error types for the Will Wizard

use thiserror::Error;

/// Errors raised by [`crate::field_list::FieldList`] edit intents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldListError {
    /// An index-based edit targeted a position outside `[0, len)`
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias using FieldListError
pub type FieldListResult<T> = Result<T, FieldListError>;

/// Errors raised by wizard-level operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Error while serializing or parsing exported answers
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using WizardError
pub type WizardResult<T> = Result<T, WizardError>;
