//! Host form state: the record the widgets write into and the rules it is
//! checked against.
//!
//! Validation follows a submit-first flow. Nothing is reported until the
//! first submit attempt; after that, every input change re-checks its own
//! field. Widgets that publish through [`FieldSink::set_value`] with
//! `validate: true` get their field checked immediately, submitted or not.

use crate::error::FormError;
use crate::file_record::FileCollection;
use crate::multiselect::SelectOption;
use crate::schema;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Fields of the contact form record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Skills,
    Files,
    Agreement,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Phone,
            Field::Email,
            Field::Skills,
            Field::Files,
            Field::Agreement,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Skills => "skills",
            Field::Files => "files",
            Field::Agreement => "agreement",
        }
    }
}

/// A value published into a field slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Options(Vec<SelectOption>),
    Files(FileCollection),
    Flag(bool),
}

/// Options for [`FieldSink::set_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetValueOptions {
    /// Re-check the field right away
    pub validate: bool,
}

impl SetValueOptions {
    pub fn validated() -> Self {
        Self { validate: true }
    }
}

/// Binding returned by [`FormState::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHandle {
    field: Field,
}

impl FieldHandle {
    pub fn field(&self) -> Field {
        self.field
    }
}

/// Write side of the host form, as seen by widgets.
pub trait FieldSink {
    fn set_value(
        &mut self,
        field: Field,
        value: FieldValue,
        options: SetValueOptions,
    ) -> Result<(), FormError>;
}

/// Per-field validation messages.
pub type FieldErrors = BTreeMap<Field, String>;

/// The contact form record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub skills: Vec<SelectOption>,
    pub files: FileCollection,
    pub agreement: bool,
}

impl ContactFormValues {
    /// JSON rendering of a submission. File contents are never included.
    pub fn to_payload(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn apply(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Name, FieldValue::Text(v)) => self.name = v,
            (Field::Phone, FieldValue::Text(v)) => self.phone = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::Skills, FieldValue::Options(v)) => self.skills = v,
            (Field::Files, FieldValue::Files(v)) => self.files = v,
            (Field::Agreement, FieldValue::Flag(v)) => self.agreement = v,
            (field, _) => {
                return Err(FormError::ValueMismatch {
                    field,
                    expected: expected_kind(field),
                })
            }
        }
        Ok(())
    }
}

fn expected_kind(field: Field) -> &'static str {
    match field {
        Field::Name | Field::Phone | Field::Email => "text",
        Field::Skills => "option list",
        Field::Files => "file list",
        Field::Agreement => "boolean",
    }
}

/// Form-wide state container.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: ContactFormValues,
    errors: FieldErrors,
    registered: BTreeSet<Field>,
    submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a widget to `field`.
    pub fn register(&mut self, field: Field) -> FieldHandle {
        if self.registered.insert(field) {
            tracing::debug!(field = field.key(), "field registered");
        }
        FieldHandle { field }
    }

    pub fn is_registered(&self, field: Field) -> bool {
        self.registered.contains(&field)
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Value changed through user input on a registered control.
    pub fn on_change(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let validate = self.submitted;
        self.set_value(field, value, SetValueOptions { validate })
    }

    /// Validate every field and run `on_valid` when the record passes.
    ///
    /// Returns whether `on_valid` ran.
    pub fn handle_submit(&mut self, on_valid: impl FnOnce(&ContactFormValues)) -> bool {
        self.submitted = true;
        self.errors = schema::validate(&self.values);
        if self.errors.is_empty() {
            on_valid(&self.values);
            true
        } else {
            tracing::debug!(errors = self.errors.len(), "submission rejected");
            false
        }
    }

    fn revalidate(&mut self, field: Field) {
        match schema::validate_field(field, &self.values) {
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

impl FieldSink for FormState {
    fn set_value(
        &mut self,
        field: Field,
        value: FieldValue,
        options: SetValueOptions,
    ) -> Result<(), FormError> {
        self.values.apply(field, value)?;
        if options.validate {
            self.revalidate(field);
        }
        Ok(())
    }
}
