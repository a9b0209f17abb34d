use eframe::egui;

use crate::form::{ErrorScenario, ERROR_SCENARIOS};
use crate::gui::helpers::scenario_tooltip;

/// Radio buttons for the error scenarios, laid out in columns.
///
/// All buttons share one selection, so picking one deselects the previous.
pub struct ErrorScenarioPicker {
    selected: Option<u8>,
    columns: usize,
}

impl ErrorScenarioPicker {
    pub fn new(selected: Option<u8>) -> Self {
        Self {
            selected,
            columns: 2,
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Draw the grid. Returns the code the user clicked this frame, if any.
    pub fn show(self, ui: &mut egui::Ui) -> Option<u8> {
        let mut clicked = None;
        let per_column = ERROR_SCENARIOS.len().div_ceil(self.columns);

        ui.columns(self.columns, |cols| {
            for (col, chunk) in cols.iter_mut().zip(ERROR_SCENARIOS.chunks(per_column)) {
                for scenario in chunk {
                    if Self::radio(col, scenario, self.selected) {
                        clicked = Some(scenario.value);
                    }
                }
            }
        });

        clicked
    }

    fn radio(ui: &mut egui::Ui, scenario: &ErrorScenario, selected: Option<u8>) -> bool {
        ui.radio(selected == Some(scenario.value), scenario.label)
            .on_hover_text(scenario_tooltip(scenario))
            .clicked()
    }
}
