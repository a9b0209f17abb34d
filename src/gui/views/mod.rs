//! View modules for the GUI
//!
//! Each submodule renders one screen of the application.
//!
//! ## Module Structure
//!
//! - `transaction_form` - The transaction feature form, submit action and prediction readout
//! - `settings` - Prediction endpoint configuration
//!
//! ## Implementation Notes
//!
//! Each view module exports a main view function that takes `&mut GuiApp` and `&mut egui::Ui`.
//! These functions are called from the main `App::update` method in `app.rs`.

pub mod settings;
pub mod transaction_form;

pub use settings::view_settings;
pub use transaction_form::view_transaction_form;
