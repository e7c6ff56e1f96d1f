use eframe::egui;
use form_model::{ContactFormValues, Field, FormConfig, FormState};

mod widgets;
use widgets::{AgreementCheckbox, DropZone, FrameDrag, MultiselectWidget, TextField};

const FORM_MAX_WIDTH: f32 = 640.0;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_tracing();
    let config = FormConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 640.0])
            .with_drag_and_drop(true),
        vsync: true,
        ..Default::default()
    };
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(ContactFormApp::new(config))),
    )
}

/// Network submission is out of scope; the payload is only logged.
fn submit(values: &ContactFormValues) {
    match values.to_payload() {
        Ok(payload) => tracing::info!("contact form submitted:\n{}", payload),
        Err(e) => tracing::warn!("could not render submission: {}", e),
    }
}

struct ContactFormApp {
    form: FormState,
    name: TextField,
    phone: TextField,
    email: TextField,
    skills: MultiselectWidget,
    drop_zone: DropZone,
    agreement: AgreementCheckbox,
    /// Form area from the previous frame, used as the drag trigger region
    form_rect: egui::Rect,
}

impl ContactFormApp {
    fn new(config: FormConfig) -> Self {
        let mut form = FormState::new();
        Self {
            name: TextField::new(form.register(Field::Name), "Name"),
            phone: TextField::new(form.register(Field::Phone), "Phone"),
            email: TextField::new(form.register(Field::Email), "E-mail"),
            skills: MultiselectWidget::new(
                "skills",
                form.register(Field::Skills),
                config.skill_options.clone(),
            ),
            drop_zone: DropZone::new("files", form.register(Field::Files), &config),
            agreement: AgreementCheckbox::new(
                form.register(Field::Agreement),
                "I’m agree with every data you collect",
            ),
            form,
            form_rect: egui::Rect::NOTHING,
        }
    }

    fn show_heading(ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Drop us a line").size(32.0).strong());
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Our documentary campaigns feature leading figures, organisations and \
                 leaders, in open and candid discussions.",
            )
            .size(17.0)
            .weak(),
        );
        ui.add_space(24.0);
    }

    fn show_fields(&mut self, ui: &mut egui::Ui) {
        let spacing = 12.0;

        self.name.show(ui, &mut self.form);
        ui.add_space(spacing);

        ui.columns(2, |cols| {
            self.phone.show(&mut cols[0], &mut self.form);
            self.email.show(&mut cols[1], &mut self.form);
        });
        ui.add_space(spacing);

        self.skills.show(ui, &mut self.form);
        ui.add_space(spacing);

        ui.horizontal_top(|ui| {
            let text_width = (ui.available_width() - 250.0).max(160.0);
            ui.allocate_ui(egui::vec2(text_width, 0.0), |ui| {
                self.drop_zone.show_text(ui, &mut self.form);
            });
            self.drop_zone.show_drop_target(ui, &mut self.form);
        });
        ui.add_space(spacing * 2.0);

        self.agreement.show(ui, &mut self.form);
        ui.add_space(spacing * 2.0);

        let send = ui.add_sized(
            [ui.available_width(), 48.0],
            egui::Button::new(egui::RichText::new("Send").size(18.0).strong()).rounding(24.0),
        );
        if send.clicked() {
            self.form.handle_submit(submit);
        }
    }
}

impl eframe::App for ContactFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drop_zone
            .pump(FrameDrag::from_ctx(ctx), self.form_rect, &mut self.form);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);
                    let shown = egui::Frame::window(ui.style())
                        .inner_margin(egui::Margin::same(40.0))
                        .rounding(32.0)
                        .show(ui, |ui| {
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                Self::show_heading(ui);
                                self.show_fields(ui);
                            });
                        });
                    self.form_rect = shown.response.rect;
                });
            });
        });

        self.drop_zone.show_drag_overlay(ctx, self.form_rect);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.drop_zone.unmount();
        tracing::debug!("drop zone released");
    }
}
