//! Helper functions for the GUI
//!
//! Input filtering and small formatting helpers shared by the views.

use eframe::egui;

use super::theme::AppTheme;
use crate::form::{DraftField, ErrorScenario, UseChip};
use crate::prediction::PredictionOutcome;

/// Keep only ASCII digits, for number-only inputs
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Hover text listing the fields that still need a value
pub fn missing_fields_hint(missing: &[DraftField], scenario_selected: bool) -> Option<String> {
    let mut parts: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    if !scenario_selected {
        parts.push("Errors?");
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("Please fill in: {}", parts.join(", ")))
    }
}

/// One reason per line, for hovering over a scenario radio
pub fn scenario_tooltip(scenario: &ErrorScenario) -> String {
    scenario.reasons().collect::<Vec<_>>().join("\n")
}

/// Combo box text for the stored use-chip value; anything unrecognized shows the prompt
pub fn use_chip_label(value: &str) -> &'static str {
    UseChip::from_value(value)
        .map(|u| u.as_str())
        .unwrap_or(UseChip::PROMPT)
}

/// Text color for the prediction readout
pub fn outcome_color(theme: &AppTheme, outcome: PredictionOutcome) -> egui::Color32 {
    if outcome.is_failure() {
        return theme.warning;
    }
    match outcome {
        PredictionOutcome::NotFraud => theme.success,
        _ => theme.error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== digits_only tests ====================

    #[test]
    fn test_digits_only_keeps_digits() {
        assert_eq!(digits_only("12"), "12");
    }

    #[test]
    fn test_digits_only_strips_other_characters() {
        assert_eq!(digits_only("1a2-b."), "12");
        assert_eq!(digits_only(" 0 7 "), "07");
        assert_eq!(digits_only("¹²"), "");
    }

    #[test]
    fn test_digits_only_empty() {
        assert_eq!(digits_only(""), "");
    }

    // ==================== missing_fields_hint tests ====================

    #[test]
    fn test_hint_none_when_complete() {
        assert!(missing_fields_hint(&[], true).is_none());
    }

    #[test]
    fn test_hint_lists_labels_in_order() {
        let hint = missing_fields_hint(&[DraftField::Month, DraftField::Mcc], true).unwrap();
        assert_eq!(hint, "Please fill in: Month, MCC");
    }

    #[test]
    fn test_hint_mentions_error_scenario() {
        let hint = missing_fields_hint(&[], false).unwrap();
        assert_eq!(hint, "Please fill in: Errors?");
    }

    // ==================== outcome_color tests ====================

    #[test]
    fn test_outcome_colors_are_distinct() {
        let theme = AppTheme::default();
        let colors = [
            outcome_color(&theme, PredictionOutcome::NotFraud),
            outcome_color(&theme, PredictionOutcome::Fraud),
            outcome_color(&theme, PredictionOutcome::Failed),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_failed_outcome_uses_warning_color() {
        let theme = AppTheme::default();
        assert_eq!(outcome_color(&theme, PredictionOutcome::Failed), theme.warning);
        assert_eq!(outcome_color(&theme, PredictionOutcome::Fraud), theme.error);
    }

    // ==================== scenario_tooltip tests ====================

    #[test]
    fn test_scenario_tooltip_lists_reasons() {
        let scenario = crate::form::find_scenario(7).unwrap();
        assert_eq!(
            scenario_tooltip(scenario),
            "Bad Card Number\nBad Card Expiration\nInsufficient Balance"
        );
    }

    // ==================== use_chip_label tests ====================

    #[test]
    fn test_use_chip_label() {
        assert_eq!(use_chip_label(""), UseChip::PROMPT);
        assert_eq!(use_chip_label("Chip Transaction"), "Chip Transaction");
        assert_eq!(use_chip_label("Tap Transaction"), UseChip::PROMPT);
    }
}
