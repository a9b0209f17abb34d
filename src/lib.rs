//! Fraudform: a desktop form that collects transaction attributes, sends them to
//! a fraud-prediction service and shows whether the transaction looks fraudulent.

pub mod background;
pub mod config;
pub mod form;
pub mod gui;
pub mod prediction;
pub mod user_settings;
