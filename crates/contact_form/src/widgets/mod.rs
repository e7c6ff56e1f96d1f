//! Widgets making up the contact form.
//!
//! Each widget keeps its own view state and is handed the form state by
//! `&mut` when drawn; nothing is shared through globals.

pub mod drop_zone;
pub mod fields;
pub mod file_picker;
pub mod multiselect;

pub use drop_zone::{DropZone, FrameDrag};
pub use fields::{AgreementCheckbox, TextField};
pub use multiselect::MultiselectWidget;
