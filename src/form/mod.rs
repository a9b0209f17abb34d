//! Transaction form state
//!
//! - `draft` - the editable transaction record, its field identifiers and validation
//! - `catalog` - the fixed list of error scenarios
//! - `controller` - `TransactionForm`, which ties the draft to a prediction request

mod catalog;
mod controller;
mod draft;

pub use catalog::{find_scenario, ErrorScenario, ERROR_SCENARIOS};
pub use controller::{SubmissionState, TransactionForm};
pub use draft::{DraftError, DraftField, TransactionDraft, UseChip};
