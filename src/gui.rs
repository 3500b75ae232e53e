//! Dialog Rendering using egui/eframe
//!
//! One [`FormApp`] renders one session: heading, optional error banner, a
//! two-column grid of label/input rows, a spacer, and the OK/Cancel row.
//! Enter and Escape are bound at the window level and are equivalent to the
//! buttons. The outcome is handed back to the blocked caller over a sync
//! channel once the event loop stops.

use std::sync::mpsc;

use eframe::egui::{self, Color32, RichText, Vec2};
use tracing::info;

use crate::config::FormConfig;
use crate::field::{FieldKind, FieldSpec, FieldValue};
use crate::form::{FormDialog, FormError, FormOutcome, FormSession};
use crate::theme::{BuiltinThemes, ThemeRegistry};

const INPUT_WIDTH: f32 = 220.0;

struct FormApp {
    config: FormConfig,
    /// Taken on the terminal transition; `None` afterwards while the window
    /// finishes closing.
    session: Option<FormSession>,
    outcome_tx: mpsc::Sender<FormOutcome>,
    danger: Color32,
}

impl FormApp {
    fn new(config: FormConfig, session: FormSession, outcome_tx: mpsc::Sender<FormOutcome>) -> Self {
        let danger = config
            .theme
            .as_deref()
            .and_then(BuiltinThemes::palette)
            .map(|palette| palette.danger)
            .unwrap_or_else(BuiltinThemes::default_danger);
        Self {
            config,
            session: Some(session),
            outcome_tx,
            danger,
        }
    }

    /// Fire the single terminal transition and close the window.
    fn finish(&mut self, ctx: &egui::Context, commit: bool) {
        if let Some(session) = self.session.take() {
            let outcome = if commit {
                session.commit()
            } else {
                session.cancel()
            };
            let _ = self.outcome_tx.send(outcome);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window-level keyboard surface: Enter commits, Escape cancels.
        let commit_key = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        let cancel_key = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        let pad = self.config.padding;
        let mut commit_clicked = false;
        let mut cancel_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(pad);

            if !self.config.header.is_empty() {
                ui.label(RichText::new(&self.config.header).size(19.0).strong());
                ui.add_space(pad);
            }

            if let Some(error) = &self.config.error_message {
                ui.label(
                    RichText::new(error)
                        .size(15.0)
                        .strong()
                        .color(self.danger),
                );
                ui.add_space(pad);
            }

            if let Some(session) = self.session.as_mut() {
                egui::Grid::new("form_fields")
                    .num_columns(2)
                    .spacing([pad * 2.0, pad])
                    .show(ui, |ui| {
                        for field in session.fields_mut() {
                            let spec = &field.spec;
                            ui.label(spec.label.as_deref().unwrap_or(&spec.name));
                            input_widget(ui, spec, &mut field.value);
                            ui.end_row();
                        }
                    });
            }

            // Spacer between the fields and the button row.
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(self.config.ok_label())
                            .min_size(Vec2::new(100.0, 32.0)),
                    )
                    .clicked()
                {
                    commit_clicked = true;
                }
                ui.add_space(pad);
                if ui
                    .add(egui::Button::new("Cancel").min_size(Vec2::new(100.0, 32.0)))
                    .clicked()
                {
                    cancel_clicked = true;
                }
            });
        });

        if commit_clicked || commit_key {
            self.finish(ctx, true);
        } else if cancel_clicked || cancel_key {
            self.finish(ctx, false);
        }
    }
}

/// Widget dispatch over the field kind.
///
/// Text and Secret share the single-line entry (Secret masks it); Checkbox
/// binds the boolean cell; Select is a read-only dropdown over the spec's
/// options, so arbitrary values cannot be typed in.
fn input_widget(ui: &mut egui::Ui, spec: &FieldSpec, value: &mut FieldValue) {
    match spec.kind {
        FieldKind::Text => {
            if let FieldValue::Text(text) = value {
                ui.add(egui::TextEdit::singleline(text).desired_width(INPUT_WIDTH));
            }
        }
        FieldKind::Secret => {
            if let FieldValue::Text(text) = value {
                ui.add(
                    egui::TextEdit::singleline(text)
                        .password(true)
                        .desired_width(INPUT_WIDTH),
                );
            }
        }
        FieldKind::Checkbox => {
            if let FieldValue::Flag(checked) = value {
                ui.checkbox(checked, "");
            }
        }
        FieldKind::Select => {
            if let FieldValue::Text(current) = value {
                egui::ComboBox::from_id_salt(&spec.name)
                    .selected_text(current.clone())
                    .width(INPUT_WIDTH)
                    .show_ui(ui, |ui| {
                        for option in &spec.options {
                            ui.selectable_value(current, option.clone(), option);
                        }
                    });
            }
        }
    }
}

/// Open the dialog window and block the calling thread until the user
/// commits or cancels. Closing the window from the window manager counts as
/// a cancel.
pub(crate) fn run_form(dialog: FormDialog) -> Result<FormOutcome, FormError> {
    let (config, session) = dialog.into_parts();

    let field_count = session.fields().len();
    let height = 140.0 + field_count as f32 * 36.0;
    let app_name = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, height])
            .with_min_inner_size([320.0, 160.0])
            .with_title(app_name.clone())
            .with_active(true),
        ..Default::default()
    };

    info!("opening form dialog '{}' with {} fields", app_name, field_count);

    let (outcome_tx, outcome_rx) = mpsc::channel();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            if let Some(name) = config.theme.as_deref() {
                BuiltinThemes.apply(&mut style, name);
            }
            cc.egui_ctx.set_style(style);
            Ok(Box::new(FormApp::new(config, session, outcome_tx)))
        }),
    )?;

    // An empty channel means the window was closed without a terminal
    // action; treat it the same as cancelling.
    Ok(outcome_rx.try_recv().unwrap_or(FormOutcome::Cancelled))
}
