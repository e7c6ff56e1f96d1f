//! Plain form controls: text inputs, the agreement checkbox and inline
//! error text.

use egui::{RichText, TextEdit, Ui};
use form_model::{FieldHandle, FieldValue, FormState};

/// Outline an errored control in the error color.
pub fn error_outline(ui: &Ui, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, ui.visuals().error_fg_color);
    ui.painter().rect_stroke(rect.expand(2.0), 6.0, stroke);
}

/// Inline error message. Reserves nothing when there is no error.
pub fn error_message(ui: &mut Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(
            RichText::new(message)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
}

/// Single-line text input bound to a form field.
pub struct TextField {
    handle: FieldHandle,
    placeholder: &'static str,
    buffer: String,
}

impl TextField {
    pub fn new(handle: FieldHandle, placeholder: &'static str) -> Self {
        Self {
            handle,
            placeholder,
            buffer: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, form: &mut FormState) {
        let field = self.handle.field();
        ui.vertical(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.buffer)
                    .hint_text(self.placeholder)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                if let Err(e) = form.on_change(field, FieldValue::Text(self.buffer.clone())) {
                    tracing::warn!(field = field.key(), "input rejected: {}", e);
                }
            }
            let error = form.error(field);
            if error.is_some() {
                error_outline(ui, response.rect);
            }
            error_message(ui, error);
        });
    }
}

/// Agreement checkbox bound to a boolean field.
pub struct AgreementCheckbox {
    handle: FieldHandle,
    label: &'static str,
    checked: bool,
}

impl AgreementCheckbox {
    pub fn new(handle: FieldHandle, label: &'static str) -> Self {
        Self {
            handle,
            label,
            checked: false,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, form: &mut FormState) {
        let field = self.handle.field();
        ui.vertical(|ui| {
            let response = ui.checkbox(&mut self.checked, self.label);
            if response.changed() {
                if let Err(e) = form.on_change(field, FieldValue::Flag(self.checked)) {
                    tracing::warn!(field = field.key(), "checkbox rejected: {}", e);
                }
            }
            let error = form.error(field);
            if error.is_some() {
                error_outline(ui, response.rect);
            }
            error_message(ui, error);
        });
    }
}
