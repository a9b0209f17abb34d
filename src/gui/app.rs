//! Main GUI application module
//!
//! Contains the GuiApp struct and all its implementations.

use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::time::Duration;

use super::theme::{configure_style, AppTheme};
use super::views::{view_settings, view_transaction_form};
use crate::config::Config;
use crate::form::TransactionForm;
use crate::prediction::PredictionClient;
use crate::user_settings::UserSettings;

/// How often to repaint while a prediction request is outstanding
const SUBMIT_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Form,
    Settings,
}

/// Editing state of the settings page
#[derive(Default)]
pub(crate) struct SettingsFormState {
    pub(crate) api_url_input: String,
    pub(crate) error: Option<String>,
    pub(crate) status: Option<String>,
}

impl SettingsFormState {
    fn populate_from(&mut self, settings: &UserSettings) {
        self.api_url_input = settings
            .api_base_url_override()
            .unwrap_or_default()
            .to_string();
        self.error = None;
        self.status = None;
    }

    /// Write the typed endpoint into `settings`. An empty input clears the override.
    /// An invalid URL leaves `settings` alone, records the error and returns false.
    fn apply_to(&mut self, settings: &mut UserSettings) -> bool {
        let input = self.api_url_input.trim();
        if !input.is_empty() {
            if let Err(e) = Config::from_base_url(input) {
                self.error = Some(format!("Invalid URL: {}", e));
                self.status = None;
                return false;
            }
        }
        settings.set_api_base_url_override(input);
        self.error = None;
        true
    }
}

pub struct GuiApp {
    /// Endpoint from the environment, before the user's override
    pub(crate) env_config: Config,
    /// Endpoint currently in use
    pub(crate) config: Config,
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) form: TransactionForm,
    pub(crate) client: Option<PredictionClient>,
    pub(crate) client_error: Option<String>,
    pub(crate) validation_message: Option<String>,
    pub(crate) settings_form: SettingsFormState,
}

impl GuiApp {
    fn new(config: Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let user_settings = UserSettings::load();
        let mut settings_form = SettingsFormState::default();
        settings_form.populate_from(&user_settings);

        let mut app = Self {
            env_config: config.clone(),
            config,
            user_settings,
            theme,
            section: GuiSection::Form,
            form: TransactionForm::new(),
            client: None,
            client_error: None,
            validation_message: None,
            settings_form,
        };
        app.apply_endpoint();
        app
    }

    /// Rebuild the effective config and prediction client from environment + saved override
    pub(crate) fn apply_endpoint(&mut self) {
        self.config = Config::resolve(&self.env_config, &self.user_settings);

        match PredictionClient::new(&self.config) {
            Ok(client) => {
                tracing::info!("Prediction endpoint: {}", client.url());
                self.client = Some(client);
                self.client_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to set up prediction client: {:#}", e);
                self.client = None;
                self.client_error = Some(format!("Prediction endpoint unavailable: {}", e));
            }
        }
    }

    /// Validate, save and apply the endpoint typed on the settings page
    pub(crate) fn apply_api_url_input(&mut self) {
        if !self.settings_form.apply_to(&mut self.user_settings) {
            return;
        }
        self.settings_form.status = Some(match self.user_settings.save() {
            Ok(()) => "Saved".to_string(),
            Err(e) => {
                tracing::warn!("Failed to save settings: {}", e);
                format!("Applied for this session, but saving failed: {}", e)
            }
        });
        self.apply_endpoint();
    }

    fn poll_jobs(&mut self) {
        if let Some(outcome) = self.form.poll() {
            tracing::debug!("Submission settled: {}", outcome);
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Fraudform").size(20.0).strong());
            ui.label(
                RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .size(12.0)
                    .color(self.theme.text_secondary),
            );
            ui.add_space(self.theme.spacing_md);
            ui.selectable_value(&mut self.section, GuiSection::Form, "Form");
            ui.selectable_value(&mut self.section, GuiSection::Settings, "Settings");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (text, color) = match &self.client {
                    Some(client) => (client.url().to_string(), self.theme.text_secondary),
                    None => ("endpoint not configured".to_string(), self.theme.error),
                };
                ui.label(RichText::new(text).small().color(color));
            });
        });
        ui.add_space(self.theme.spacing_sm);
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();
        if self.form.is_submitting() {
            // Keep the spinner moving and pick up the response without user input
            ctx.request_repaint_after(SUBMIT_REPAINT_INTERVAL);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(self.theme.spacing_md);
                    match self.section {
                        GuiSection::Form => view_transaction_form(self, ui),
                        GuiSection::Settings => view_settings(self, ui),
                    }
                    ui.add_space(self.theme.spacing_md);
                });
        });
    }
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([820.0, 900.0])
        .with_min_inner_size([520.0, 480.0]);

    let native_options = NativeOptions {
        viewport,
        // Enable window state persistence (size, position)
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Transaction Feature Form",
        native_options,
        Box::new(app_creator),
    )
    .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
