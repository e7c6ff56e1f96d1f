//! Selection state behind the skills multiselect.

use crate::form::{Field, FieldHandle, FieldSink, FieldValue, SetValueOptions};
use serde::{Deserialize, Serialize};

/// Placeholder shown while nothing is selected.
pub const PLACEHOLDER: &str = "Your skill";

/// One entry offered by a multiselect. Selection identity is the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Selected options plus whether the option list is unfolded.
#[derive(Debug, Clone)]
pub struct MultiselectState {
    handle: FieldHandle,
    selected: Vec<SelectOption>,
    open: bool,
}

impl MultiselectState {
    pub fn new(handle: FieldHandle) -> Self {
        Self {
            handle,
            selected: Vec::new(),
            open: false,
        }
    }

    pub fn handle(&self) -> FieldHandle {
        self.handle
    }

    pub fn selected(&self) -> &[SelectOption] {
        &self.selected
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected.iter().any(|s| s.label == option.label)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Text for the closed control.
    pub fn display_text(&self) -> String {
        if self.selected.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.selected
                .iter()
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Toggle `option` in the selection and publish the result.
    pub fn select(&mut self, option: &SelectOption, host: &mut impl FieldSink) {
        if self.is_selected(option) {
            self.selected.retain(|s| s.label != option.label);
        } else {
            self.selected.push(option.clone());
        }
        self.publish(host);
    }

    fn publish(&self, host: &mut impl FieldSink) {
        let field: Field = self.handle.field();
        if let Err(e) = host.set_value(
            field,
            FieldValue::Options(self.selected.clone()),
            SetValueOptions::validated(),
        ) {
            tracing::warn!(field = field.key(), "failed to publish selection: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    fn options() -> Vec<SelectOption> {
        ["Junior", "Middle", "Senior"]
            .into_iter()
            .map(|l| SelectOption::new(l, l))
            .collect()
    }

    #[test]
    fn test_placeholder_and_join() {
        let mut form = FormState::new();
        let mut select = MultiselectState::new(form.register(Field::Skills));
        assert_eq!(select.display_text(), PLACEHOLDER);

        let opts = options();
        select.select(&opts[2], &mut form);
        select.select(&opts[0], &mut form);
        assert_eq!(select.display_text(), "Senior, Junior");
    }

    #[test]
    fn test_select_toggles_by_label() {
        let mut form = FormState::new();
        let mut select = MultiselectState::new(form.register(Field::Skills));
        let opts = options();

        select.select(&opts[1], &mut form);
        assert!(select.is_selected(&opts[1]));
        assert_eq!(form.values().skills, vec![opts[1].clone()]);

        // same label, different value still deselects
        select.select(&SelectOption::new("Middle", "other"), &mut form);
        assert!(select.selected().is_empty());
        assert!(form.values().skills.is_empty());
        assert_eq!(form.error(Field::Skills), Some("Field is required"));
    }

    #[test]
    fn test_open_close() {
        let mut form = FormState::new();
        let mut select = MultiselectState::new(form.register(Field::Skills));
        assert_eq!(select.handle().field(), Field::Skills);
        assert!(!select.is_open());
        select.toggle_open();
        assert!(select.is_open());
        select.close();
        assert!(!select.is_open());
    }
}
