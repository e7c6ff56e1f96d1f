//! Error types for the form model.

use crate::form::Field;

/// Errors raised by the host form state.
///
/// Validation failures are not errors here: they live in [`crate::FieldErrors`]
/// and are shown inline next to the field.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Field {field:?} expects a {expected} value")]
    ValueMismatch { field: Field, expected: &'static str },

    #[error("Failed to serialize submission: {0}")]
    Payload(#[from] serde_json::Error),
}
