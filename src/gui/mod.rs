//! GUI module for Fraudform
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, navigation and endpoint handling
//! - `theme` - Centralized theme and styling system (AppTheme)
//! - `helpers` - Input filtering and formatting helpers
//! - `views` - View rendering functions (transaction form, settings)
//! - `widgets` - Reusable UI widgets (error scenario picker, outcome readout)
//!
//! ## Usage
//!
//! ```no_run
//! use fraudform::config::Config;
//! use fraudform::gui;
//!
//! let config = Config::from_env();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod helpers;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, GuiApp, GuiSection};

pub use crate::background::{spawn_job, AsyncJob};
pub use theme::{configure_style, AppTheme};
pub use widgets::{ErrorScenarioPicker, OutcomeReadout};
