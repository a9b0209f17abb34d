//! Widget components for the GUI
//!
//! This module contains reusable UI widgets that can be embedded in views.
//!
//! ## Available Widgets
//!
//! - `ErrorScenarioPicker` - Single-choice radio grid over the error scenario catalog
//! - `OutcomeReadout` - Loading indicator and prediction result

mod error_scenarios;
mod outcome;

pub use error_scenarios::ErrorScenarioPicker;
pub use outcome::OutcomeReadout;
