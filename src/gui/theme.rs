//! Centralized theme and styling system for the GUI
//!
//! Provides the AppTheme struct with colors, spacing, and styled widget factories.

use eframe::egui;

/// Centralized theme and styling system
#[derive(Clone, Copy)]
pub struct AppTheme {
    // Base colors
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub border: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    // Semantic colors
    pub primary: egui::Color32,
    pub primary_hover: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub error: egui::Color32,

    // Spacing constants
    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    // Button sizes
    pub button_small: egui::Vec2,
    pub button_medium: egui::Vec2,

    /// Width of the input column in the form grid
    pub input_width: f32,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            // Light card on a gray page
            background: egui::Color32::from_rgb(243, 244, 246),
            surface: egui::Color32::WHITE,
            border: egui::Color32::from_rgb(209, 213, 219),
            text_primary: egui::Color32::BLACK,
            text_secondary: egui::Color32::from_rgb(75, 85, 99),

            primary: egui::Color32::from_rgb(59, 130, 246),
            primary_hover: egui::Color32::from_rgb(37, 99, 235),
            success: egui::Color32::from_rgb(22, 163, 74),
            warning: egui::Color32::from_rgb(217, 119, 6),
            error: egui::Color32::from_rgb(220, 38, 38),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_small: egui::vec2(90.0, 26.0),
            button_medium: egui::vec2(120.0, 34.0),

            input_width: 320.0,
        }
    }
}

impl AppTheme {
    /// Filled blue button used for the main action
    pub fn button_primary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong())
            .fill(self.primary)
            .rounding(4.0)
            .min_size(self.button_medium)
    }

    /// Outlined button for secondary actions
    pub fn button_secondary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.0, self.border))
            .rounding(4.0)
            .min_size(self.button_small)
    }

    /// White card holding the form
    pub fn frame_card(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(6.0)
            .inner_margin(self.spacing_lg)
            .stroke(egui::Stroke::new(1.0, self.border))
    }

    /// Create a themed frame for panels inside the card
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(4.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.border))
    }

    /// Calculate responsive width clamped to min/max bounds
    pub fn responsive_width(ui: &egui::Ui, min: f32, preferred: f32, max: f32) -> f32 {
        let available = ui.available_width();
        available.clamp(min, max.min(preferred))
    }
}

/// Configure the egui context style with the given theme
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = egui::Visuals::light();
    visuals.window_fill = theme.surface;
    visuals.panel_fill = theme.background;
    visuals.override_text_color = Some(theme.text_primary);

    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.primary_hover);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, theme.primary);
    visuals.selection.bg_fill = theme.primary;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(24.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(15.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(15.0, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}
