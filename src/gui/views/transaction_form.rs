//! Transaction feature form view
//!
//! Renders one input per draft field, the error scenario radio grid, the submit
//! button and the prediction readout. Required fields are enforced here: the
//! submit button stays disabled until the draft validates.

use eframe::egui::{self, RichText};

use super::super::app::GuiApp;
use super::super::helpers::{digits_only, missing_fields_hint, use_chip_label};
use super::super::theme::AppTheme;
use super::super::widgets::{ErrorScenarioPicker, OutcomeReadout};
use crate::form::{DraftField, UseChip};

/// Renders the transaction form
pub fn view_transaction_form(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;
    let card_width = AppTheme::responsive_width(ui, 480.0, 760.0, 900.0);

    ui.vertical_centered(|ui| {
        ui.set_max_width(card_width);
        theme.frame_card().show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.heading(RichText::new("Transaction Feature Form").strong());
                ui.add_space(theme.spacing_md);

                render_fields(app, ui);
                ui.add_space(theme.spacing_md);

                ui.label(RichText::new("Errors?").color(theme.text_primary));
                ui.add_space(theme.spacing_xs);
                let columns = if ui.available_width() < 560.0 { 1 } else { 2 };
                let selected = app.form.draft().error;
                if let Some(code) = ErrorScenarioPicker::new(selected).columns(columns).show(ui) {
                    app.form.select_error(code);
                }

                ui.add_space(theme.spacing_md);
                render_submit(app, ui);

                ui.add_space(theme.spacing_lg);
                OutcomeReadout::new(&theme, app.form.is_submitting(), app.form.outcome())
                    .resolved_at(app.form.resolved_at())
                    .show(ui);
            });
        });
    });
}

fn render_fields(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;
    egui::Grid::new("transaction_fields_grid")
        .num_columns(2)
        .spacing([theme.spacing_md, theme.spacing_sm])
        .show(ui, |ui| {
            for field in DraftField::ALL {
                ui.label(RichText::new(field.label()).color(theme.text_primary));
                if field == DraftField::UseChip {
                    render_use_chip(app, ui);
                } else {
                    render_text_input(app, ui, field);
                }
                ui.end_row();
            }
        });
}

fn render_text_input(app: &mut GuiApp, ui: &mut egui::Ui, field: DraftField) {
    let mut value = app.form.draft().get(field).to_string();
    let mut edit = egui::TextEdit::singleline(&mut value)
        .id_source(field.key())
        .desired_width(app.theme.input_width);
    if let Some(hint) = field.placeholder() {
        edit = edit.hint_text(hint);
    }

    if ui.add(edit).changed() {
        if field.is_numeric() {
            value = digits_only(&value);
        }
        app.form.update_field(field, value);
    }
}

fn render_use_chip(app: &mut GuiApp, ui: &mut egui::Ui) {
    let current = UseChip::from_value(&app.form.draft().use_chip);
    let selected_text = use_chip_label(&app.form.draft().use_chip);

    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_source(DraftField::UseChip.key())
        .selected_text(selected_text)
        .width(app.theme.input_width)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), UseChip::PROMPT).clicked() {
                picked = Some(String::new());
            }
            for option in UseChip::ALL {
                if ui
                    .selectable_label(current == Some(option), option.as_str())
                    .clicked()
                {
                    picked = Some(option.as_str().to_string());
                }
            }
        });

    if let Some(value) = picked {
        app.form.update_field(DraftField::UseChip, value);
    }
}

fn render_submit(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;
    let submitting = app.form.is_submitting();
    let draft = app.form.draft();
    let hint = missing_fields_hint(&draft.missing_fields(), draft.error.is_some());
    let enabled = !submitting && draft.is_complete() && app.client.is_some();

    let hover = if submitting {
        "Waiting for the prediction service".to_string()
    } else if app.client.is_none() {
        "Prediction endpoint is not configured, see Settings".to_string()
    } else {
        hint.unwrap_or_else(|| "Send this transaction for a prediction".to_string())
    };

    let response = ui
        .add_enabled(enabled, theme.button_primary("Submit"))
        .on_hover_text(hover.clone())
        .on_disabled_hover_text(hover);

    if response.clicked() {
        if let Some(client) = &app.client {
            match app.form.submit(client) {
                Ok(true) => app.validation_message = None,
                Ok(false) => {}
                Err(e) => app.validation_message = Some(e.to_string()),
            }
        }
    }

    if let Some(message) = &app.validation_message {
        ui.label(RichText::new(message).color(theme.error));
    } else if let Some(error) = &app.client_error {
        ui.label(RichText::new(error).color(theme.error));
    }
}
