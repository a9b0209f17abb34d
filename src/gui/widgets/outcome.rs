use chrono::{DateTime, Local};
use eframe::egui::{self, RichText};

use crate::gui::helpers::outcome_color;
use crate::gui::theme::AppTheme;
use crate::prediction::PredictionOutcome;

/// Spinner while a request is outstanding, then "Prediction: <outcome>"
pub struct OutcomeReadout<'a> {
    theme: &'a AppTheme,
    loading: bool,
    outcome: Option<PredictionOutcome>,
    resolved_at: Option<DateTime<Local>>,
}

impl<'a> OutcomeReadout<'a> {
    pub fn new(theme: &'a AppTheme, loading: bool, outcome: Option<PredictionOutcome>) -> Self {
        Self {
            theme,
            loading,
            outcome,
            resolved_at: None,
        }
    }

    pub fn resolved_at(mut self, at: Option<DateTime<Local>>) -> Self {
        self.resolved_at = at;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            if self.loading {
                ui.add(egui::Spinner::new().size(32.0).color(self.theme.primary));
                ui.label(RichText::new("Predicting...").color(self.theme.text_secondary));
                return;
            }

            let Some(outcome) = self.outcome else {
                return;
            };
            ui.label(
                RichText::new(format!("Prediction: {}", outcome))
                    .size(20.0)
                    .strong()
                    .color(outcome_color(self.theme, outcome)),
            );
            if let Some(at) = self.resolved_at {
                ui.label(
                    RichText::new(format!("as of {}", at.format("%H:%M:%S")))
                        .small()
                        .color(self.theme.text_secondary),
                );
            }
        });
    }
}
