//! Form model for the contact form
//!
//! This crate holds everything the contact form does apart from drawing:
//! - File intake (extension allow-list, drag state, accepted file list)
//! - Host form state (field values, submit flow, per-field errors)
//! - Validation rules
//! - Multiselect selection state
//! - Compiled-in configuration

pub mod config;
pub mod drag;
pub mod error;
pub mod extension;
pub mod file_record;
pub mod form;
pub mod intake;
pub mod multiselect;
pub mod schema;

pub use config::FormConfig;
pub use drag::{Boundary, DragState, DragTracker, DragTransition};
pub use error::FormError;
pub use extension::is_extension_valid;
pub use file_record::{FileCollection, FileContent, FileRecord};
pub use form::{
    ContactFormValues, Field, FieldErrors, FieldHandle, FieldSink, FieldValue, FormState,
    SetValueOptions,
};
pub use intake::{FileIntake, IntakeOutcome, UNSUPPORTED_FORMAT};
pub use multiselect::{MultiselectState, SelectOption};
