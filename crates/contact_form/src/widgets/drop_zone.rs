//! Drop zone for adding documents to the form.
//!
//! egui reports files hovering the window and files dropped on it, but no
//! enter/leave events. [`DropZone::pump`] turns each frame's raw input into
//! enter, leave and drop events for the drag tracker, using the whole form
//! as the trigger boundary. While a drag is over the form, the drop target
//! grows into an overlay covering the form.

use super::fields::{error_message, error_outline};
use super::file_picker::FilePickerWidget;
use anyhow::Context as _;
use egui::{Align2, Context, DroppedFile, Id, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};
use form_model::{
    Field, FieldHandle, FileContent, FileIntake, FileRecord, FormConfig, FormState,
};

const DROP_TARGET_HEIGHT: f32 = 120.0;
const DROP_TARGET_MIN_WIDTH: f32 = 125.0;
const DROP_TARGET_MAX_WIDTH: f32 = 234.0;

/// Drag-and-drop input observed during one frame.
#[derive(Debug, Default)]
pub struct FrameDrag {
    /// Files are being dragged over the window
    pub hovering: bool,
    /// Latest known pointer position
    pub pointer: Option<Pos2>,
    /// Files released this frame
    pub dropped: Vec<FileRecord>,
}

impl FrameDrag {
    pub fn from_ctx(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            hovering: !i.raw.hovered_files.is_empty(),
            pointer: i.pointer.latest_pos(),
            dropped: i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| match record_from_dropped(file) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("skipping dropped file: {:#}", e);
                        None
                    }
                })
                .collect(),
        })
    }
}

/// Convert egui's dropped file into a form record.
pub fn record_from_dropped(file: &DroppedFile) -> anyhow::Result<FileRecord> {
    if let Some(path) = &file.path {
        return Ok(FileRecord::from_path(path.clone()));
    }
    let bytes = file
        .bytes
        .clone()
        .with_context(|| format!("dropped file {:?} has neither a path nor bytes", file.name))?;
    Ok(FileRecord::new(file.name.clone(), FileContent::Bytes(bytes)))
}

/// The document upload section of the form.
pub struct DropZone {
    intake: FileIntake,
    picker: FilePickerWidget,
    allowed: Vec<String>,
    help_text: String,
    was_hovering: bool,
    id: Id,
}

impl DropZone {
    pub fn new(id: impl std::hash::Hash, handle: FieldHandle, config: &FormConfig) -> Self {
        Self {
            intake: FileIntake::new(handle),
            picker: FilePickerWidget::new(config),
            allowed: config.allowed_extensions.clone(),
            help_text: format!(
                "Klicken Sie auf die Schaltfläche oder ziehen Sie ein Dokument im {}.",
                config.extensions_label()
            ),
            was_hovering: false,
            id: Id::new(id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.intake.drag().is_dragging()
    }

    /// Feed one frame of drag input. `trigger` is the form's rect.
    pub fn pump(&mut self, frame: FrameDrag, trigger: Rect, form: &mut FormState) {
        if !self.intake.drag().is_attached() {
            return;
        }
        let boundary = |p: &Pos2| trigger.contains(*p);
        // some platforms stop reporting the pointer during an OS drag;
        // a hovering drag with no position counts as over the form
        let target = frame.pointer.unwrap_or_else(|| trigger.center());

        if !frame.dropped.is_empty() {
            if self.is_dragging() || boundary(&target) {
                self.intake.drag_mut().drop_files();
                self.intake.intake(frame.dropped, &self.allowed, form);
            } else {
                tracing::debug!(count = frame.dropped.len(), "ignoring drop outside the form");
            }
        } else if frame.hovering {
            let drag = self.intake.drag_mut();
            if boundary(&target) {
                drag.drag_enter(&boundary, Some(&target));
            } else {
                drag.drag_leave(&boundary, Some(&target));
            }
        } else if self.was_hovering {
            self.intake.drag_mut().drag_leave::<Pos2, _>(&boundary, None);
        }

        self.was_hovering = frame.hovering;
    }

    /// Heading, help text and the chip list of accepted files.
    pub fn show_text(&mut self, ui: &mut Ui, form: &mut FormState) {
        ui.vertical(|ui| {
            ui.label(RichText::new("Dokument hochladen").strong());
            ui.label(RichText::new(&self.help_text).small().weak());
            ui.add_space(6.0);
            self.show_file_list(ui, form);
        });
    }

    fn show_file_list(&mut self, ui: &mut Ui, form: &mut FormState) {
        let mut remove: Option<usize> = None;

        ui.horizontal_wrapped(|ui| {
            for (index, file) in self.intake.files().iter().enumerate() {
                egui::Frame::none()
                    .fill(ui.visuals().faint_bg_color)
                    .rounding(10.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("📄").small());
                            ui.add(
                                egui::Label::new(RichText::new(file.name()).small())
                                    .truncate(true),
                            );
                            if ui.small_button("✖").on_hover_text("Remove").clicked() {
                                remove = Some(index);
                            }
                        });
                    });
            }
        });

        if let Some(index) = remove {
            self.intake.remove(index, form);
        }
    }

    /// The clickable drop target plus its error line.
    ///
    /// While dragging, a placeholder keeps the layout and the target itself
    /// is drawn by [`DropZone::show_drag_overlay`].
    pub fn show_drop_target(&mut self, ui: &mut Ui, form: &mut FormState) {
        let width = ui
            .available_width()
            .clamp(DROP_TARGET_MIN_WIDTH, DROP_TARGET_MAX_WIDTH);

        ui.vertical(|ui| {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(width, DROP_TARGET_HEIGHT), Sense::click());

            if !self.is_dragging() {
                let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
                paint_dashed_box(ui, rect, response.hovered());
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "➕",
                    egui::FontId::proportional(22.0),
                    ui.visuals().weak_text_color(),
                );

                if response.clicked() {
                    let picked = self.picker.pick_files();
                    self.intake.intake(picked, &self.allowed, form);
                }
            }

            let message = self.intake.error_message(form.error(Field::Files));
            if message.is_some() {
                error_outline(ui, rect);
            }
            error_message(ui, message);
        });
    }

    /// Expanded drop target covering the form while files are dragged over it.
    pub fn show_drag_overlay(&self, ctx: &Context, form_rect: Rect) {
        if !self.is_dragging() {
            return;
        }

        let rect = form_rect.shrink(24.0);
        egui::Area::new(self.id.with("overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.allocate_exact_size(rect.size(), Sense::hover());
                ui.painter().rect_filled(rect, 12.0, ui.visuals().window_fill());
                paint_dashed_box(ui, rect, true);

                ui.painter().text(
                    rect.center() - Vec2::new(0.0, 16.0),
                    Align2::CENTER_CENTER,
                    "Drop files here",
                    egui::FontId::proportional(24.0),
                    ui.visuals().strong_text_color(),
                );
                ui.painter().text(
                    rect.center() + Vec2::new(0.0, 16.0),
                    Align2::CENTER_CENTER,
                    "Put your files in this field",
                    egui::FontId::proportional(18.0),
                    ui.visuals().text_color(),
                );
            });
    }

    /// Stop reacting to drag input.
    pub fn unmount(&mut self) {
        self.intake.unmount();
    }
}

fn paint_dashed_box(ui: &Ui, rect: Rect, highlighted: bool) {
    let visuals = ui.visuals();
    if highlighted {
        ui.painter().rect_filled(rect, 12.0, visuals.faint_bg_color);
    }
    let stroke = Stroke::new(1.0, visuals.weak_text_color());
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    ui.painter()
        .extend(egui::Shape::dashed_line(&corners, stroke, 6.0, 4.0));
}
