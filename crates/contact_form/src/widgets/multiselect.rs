//! Skills multiselect: a closed box showing the selection and a popup list
//! of options that stays open while options are toggled.

use super::fields::{error_message, error_outline};
use egui::{Align2, Area, Frame, Id, Key, Order, Pos2, Rect, RichText, Sense, Ui, Vec2};
use form_model::{FieldHandle, FormState, MultiselectState, SelectOption};

const BOX_HEIGHT: f32 = 40.0;

/// True when a click landed outside every rect in `inside`.
pub fn is_outside_click(click: Option<Pos2>, inside: &[Rect]) -> bool {
    click.is_some_and(|p| !inside.iter().any(|r| r.contains(p)))
}

pub struct MultiselectWidget {
    state: MultiselectState,
    options: Vec<SelectOption>,
    id: Id,
}

impl MultiselectWidget {
    pub fn new(id: impl std::hash::Hash, handle: FieldHandle, options: Vec<SelectOption>) -> Self {
        Self {
            state: MultiselectState::new(handle),
            options,
            id: Id::new(id),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, form: &mut FormState) {
        let field = self.state.handle().field();
        ui.vertical(|ui| {
            let width = ui.available_width();
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(width, BOX_HEIGHT), Sense::click());
            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.clicked()
                || (response.has_focus() && ui.input(|i| i.key_pressed(Key::Space)))
            {
                self.state.toggle_open();
            }

            self.paint_box(ui, rect);
            if form.error(field).is_some() {
                error_outline(ui, rect);
            }

            let mut inside = vec![rect];
            if self.state.is_open() {
                inside.push(self.show_list(ui.ctx(), rect, form));
            }

            let click = ui.input(|i| {
                if i.pointer.any_click() {
                    i.pointer.interact_pos()
                } else {
                    None
                }
            });
            if self.state.is_open() && is_outside_click(click, &inside) {
                self.state.close();
            }

            error_message(ui, form.error(field));
        });
    }

    fn paint_box(&self, ui: &Ui, rect: Rect) {
        let visuals = ui.visuals();
        ui.painter().rect(
            rect,
            6.0,
            visuals.extreme_bg_color,
            visuals.widgets.inactive.bg_stroke,
        );

        let color = if self.state.selected().is_empty() {
            visuals.weak_text_color()
        } else {
            visuals.strong_text_color()
        };
        ui.painter().text(
            rect.left_center() + Vec2::new(12.0, 0.0),
            Align2::LEFT_CENTER,
            self.state.display_text(),
            egui::FontId::proportional(15.0),
            color,
        );
        ui.painter().text(
            rect.right_center() - Vec2::new(12.0, 0.0),
            Align2::RIGHT_CENTER,
            if self.state.is_open() { "⏶" } else { "⏷" },
            egui::FontId::proportional(15.0),
            visuals.text_color(),
        );
    }

    /// Draw the option list under the box and return the area it covered.
    fn show_list(&mut self, ctx: &egui::Context, anchor: Rect, form: &mut FormState) -> Rect {
        let mut clicked: Option<SelectOption> = None;

        let shown = Area::new(self.id.with("options"))
            .order(Order::Foreground)
            .fixed_pos(anchor.left_bottom() + Vec2::new(0.0, 8.0))
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(anchor.width() - 16.0);
                    for option in &self.options {
                        let selected = self.state.is_selected(option);
                        let text = if selected {
                            RichText::new(&option.label).strong()
                        } else {
                            RichText::new(&option.label).weak()
                        };
                        if ui.selectable_label(selected, text).clicked() {
                            clicked = Some(option.clone());
                        }
                    }
                });
            });

        if let Some(option) = clicked {
            self.state.select(&option, form);
        }
        shown.response.rect
    }
}
