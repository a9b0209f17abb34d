//! Settings view implementation
//!
//! Lets the user point the form at a different prediction service. The value
//! is saved with the user settings and overrides `PREDICTION_API_URL`.

use eframe::egui::{self, RichText};

use super::super::app::GuiApp;
use crate::config::{API_URL_ENV, DEFAULT_API_BASE_URL};
use crate::user_settings::UserSettings;

/// Renders the Settings view
pub fn view_settings(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.heading(RichText::new("Settings").strong());
    ui.add_space(theme.spacing_md);

    theme.frame_panel().show(ui, |ui| {
        ui.label(RichText::new("Prediction service").strong());
        ui.label(
            RichText::new(format!(
                "Base URL of the service. Leave empty to use {} or {}.",
                API_URL_ENV, DEFAULT_API_BASE_URL
            ))
            .small()
            .color(theme.text_secondary),
        );
        ui.add_space(theme.spacing_sm);

        ui.horizontal(|ui| {
            ui.label("Base URL:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.settings_form.api_url_input)
                    .hint_text(DEFAULT_API_BASE_URL)
                    .desired_width(theme.input_width),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.add(theme.button_primary("Apply")).clicked() || enter {
                app.apply_api_url_input();
            }
            if ui.add(theme.button_secondary("Reset")).clicked() {
                app.settings_form.api_url_input.clear();
                app.apply_api_url_input();
            }
        });

        ui.add_space(theme.spacing_sm);
        ui.label(format!("Base URL in use: {}", app.config.api_base_url));
        match &app.client {
            Some(client) => {
                ui.label(
                    RichText::new(format!("Requests go to {}", client.url()))
                        .color(theme.text_secondary),
                );
            }
            None => {
                ui.label(
                    RichText::new(app.client_error.as_deref().unwrap_or("No prediction client"))
                        .color(theme.error),
                );
            }
        }

        if let Some(error) = &app.settings_form.error {
            ui.label(RichText::new(error).color(theme.error));
        }
        if let Some(status) = &app.settings_form.status {
            ui.label(RichText::new(status).color(theme.success));
        }
    });

    ui.add_space(theme.spacing_md);
    ui.label(
        RichText::new(format!("Settings file: {}", UserSettings::settings_path_display()))
            .small()
            .color(theme.text_secondary),
    );
}
