//! Client side of the external fraud-prediction service
//!
//! The service takes the transaction draft as a flat JSON object and answers
//! with `{"prediction": <number>}`, where `0` means "not fraud".
//!
//! - `request` - wire body sent to the service
//! - `client` - HTTP client and response schema check
//! - `outcome` - classification and the user-facing readout

mod client;
mod outcome;
mod request;

pub use client::{classify_response, PredictionClient, PredictionError};
pub use outcome::{Prediction, PredictionOutcome, PREDICTION_FAILED_MESSAGE};
pub use request::PredictionRequest;
