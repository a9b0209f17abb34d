use serde::{Deserialize, Serialize};

/// JSON body POSTed to the prediction endpoint.
///
/// Keys match what the service expects: `useChip`, `merchantName`, etc.
/// Every transaction field is sent as typed by the user; `error` is the
/// selected scenario code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub month: String,
    pub day: String,
    pub time: String,
    pub amount: String,
    pub use_chip: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub merchant_state: String,
    pub zip: String,
    pub mcc: String,
    pub error: u8,
}
