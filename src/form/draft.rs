use thiserror::Error;

use super::catalog::find_scenario;
use crate::prediction::PredictionRequest;

/// The ten text fields of a transaction draft
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Month,
    Day,
    Time,
    Amount,
    UseChip,
    MerchantName,
    MerchantCity,
    MerchantState,
    Zip,
    Mcc,
}

impl DraftField {
    /// Form order
    pub const ALL: [DraftField; 10] = [
        DraftField::Month,
        DraftField::Day,
        DraftField::Time,
        DraftField::Amount,
        DraftField::UseChip,
        DraftField::MerchantName,
        DraftField::MerchantCity,
        DraftField::MerchantState,
        DraftField::Zip,
        DraftField::Mcc,
    ];

    /// JSON key used by the prediction service
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Month => "month",
            DraftField::Day => "day",
            DraftField::Time => "time",
            DraftField::Amount => "amount",
            DraftField::UseChip => "useChip",
            DraftField::MerchantName => "merchantName",
            DraftField::MerchantCity => "merchantCity",
            DraftField::MerchantState => "merchantState",
            DraftField::Zip => "zip",
            DraftField::Mcc => "mcc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Month => "Month",
            DraftField::Day => "Day",
            DraftField::Time => "Time",
            DraftField::Amount => "Amount",
            DraftField::UseChip => "Use Chip",
            DraftField::MerchantName => "Merchant Name",
            DraftField::MerchantCity => "Merchant City",
            DraftField::MerchantState => "Merchant State",
            DraftField::Zip => "Zip",
            DraftField::Mcc => "MCC",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            DraftField::Time => Some("HH:MM"),
            DraftField::Amount => Some("$"),
            _ => None,
        }
    }

    /// Month and day are entered as numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, DraftField::Month | DraftField::Day)
    }
}

/// How the card was used
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseChip {
    Online,
    Chip,
    Swipe,
}

impl UseChip {
    pub const ALL: [UseChip; 3] = [UseChip::Online, UseChip::Chip, UseChip::Swipe];

    /// Prompt shown while nothing is selected
    pub const PROMPT: &'static str = "Select Transaction Type";

    pub fn as_str(&self) -> &'static str {
        match self {
            UseChip::Online => "Online Transaction",
            UseChip::Chip => "Chip Transaction",
            UseChip::Swipe => "Swipe Transaction",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{} is required", .0.label())]
    MissingField(DraftField),

    #[error("an error scenario must be selected")]
    NoErrorScenario,

    #[error("unknown error scenario code {0}")]
    UnknownErrorScenario(u8),
}

/// The transaction record being edited. Starts empty with no scenario selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
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
    pub error: Option<u8>,
}

impl TransactionDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Month => &self.month,
            DraftField::Day => &self.day,
            DraftField::Time => &self.time,
            DraftField::Amount => &self.amount,
            DraftField::UseChip => &self.use_chip,
            DraftField::MerchantName => &self.merchant_name,
            DraftField::MerchantCity => &self.merchant_city,
            DraftField::MerchantState => &self.merchant_state,
            DraftField::Zip => &self.zip,
            DraftField::Mcc => &self.mcc,
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Month => &mut self.month,
            DraftField::Day => &mut self.day,
            DraftField::Time => &mut self.time,
            DraftField::Amount => &mut self.amount,
            DraftField::UseChip => &mut self.use_chip,
            DraftField::MerchantName => &mut self.merchant_name,
            DraftField::MerchantCity => &mut self.merchant_city,
            DraftField::MerchantState => &mut self.merchant_state,
            DraftField::Zip => &mut self.zip,
            DraftField::Mcc => &mut self.mcc,
        }
    }

    /// Replace one field, no validation
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Select the error scenario; replaces any previous selection
    pub fn select_error(&mut self, code: u8) {
        self.error = Some(code);
    }

    /// Fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check required fields and build the request body
    pub fn validate(&self) -> Result<PredictionRequest, DraftError> {
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(DraftError::MissingField(field));
        }
        let code = self.error.ok_or(DraftError::NoErrorScenario)?;
        if find_scenario(code).is_none() {
            return Err(DraftError::UnknownErrorScenario(code));
        }

        Ok(PredictionRequest {
            month: self.month.clone(),
            day: self.day.clone(),
            time: self.time.clone(),
            amount: self.amount.clone(),
            use_chip: self.use_chip.clone(),
            merchant_name: self.merchant_name.clone(),
            merchant_city: self.merchant_city.clone(),
            merchant_state: self.merchant_state.clone(),
            zip: self.zip.clone(),
            mcc: self.mcc.clone(),
            error: code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransactionDraft {
        let mut draft = TransactionDraft::default();
        for field in DraftField::ALL {
            draft.update_field(field, format!("{}-value", field.key()));
        }
        draft.select_error(12);
        draft
    }

    // ==================== update_field tests ====================

    #[test]
    fn test_default_draft_is_empty() {
        let draft = TransactionDraft::default();
        for field in DraftField::ALL {
            assert_eq!(draft.get(field), "");
        }
        assert!(draft.error.is_none());
    }

    #[test]
    fn test_update_field_last_write_wins() {
        let mut draft = TransactionDraft::default();

        draft.update_field(DraftField::Amount, "$1");
        draft.update_field(DraftField::Zip, "10001");
        draft.update_field(DraftField::Amount, "$2.50");

        assert_eq!(draft.get(DraftField::Amount), "$2.50");
        assert_eq!(draft.get(DraftField::Zip), "10001");
        for field in DraftField::ALL {
            if field != DraftField::Amount && field != DraftField::Zip {
                assert_eq!(draft.get(field), "", "{:?} should be untouched", field);
            }
        }
    }

    #[test]
    fn test_each_field_maps_to_its_own_slot() {
        let draft = filled();
        assert_eq!(draft.month, "month-value");
        assert_eq!(draft.use_chip, "useChip-value");
        assert_eq!(draft.merchant_state, "merchantState-value");
        assert_eq!(draft.mcc, "mcc-value");
    }

    #[test]
    fn test_update_field_does_not_touch_error() {
        let mut draft = TransactionDraft::default();
        draft.select_error(4);
        draft.update_field(DraftField::Time, "10:15");
        assert_eq!(draft.error, Some(4));
    }

    // ==================== select_error tests ====================

    #[test]
    fn test_select_error_replaces_previous() {
        let mut draft = filled();
        let before = draft.clone();

        draft.select_error(3);
        draft.select_error(21);

        assert_eq!(draft.error, Some(21));
        assert_eq!(TransactionDraft { error: before.error, ..draft.clone() }, before);
    }

    // ==================== validate tests ====================

    #[test]
    fn test_validate_complete_draft() {
        let draft = filled();
        let request = draft.validate().unwrap();
        assert_eq!(request.merchant_city, "merchantCity-value");
        assert_eq!(request.error, 12);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut draft = filled();
        draft.update_field(DraftField::Zip, "");
        draft.update_field(DraftField::Time, "");

        assert_eq!(draft.validate(), Err(DraftError::MissingField(DraftField::Time)));
        assert_eq!(draft.missing_fields(), vec![DraftField::Time, DraftField::Zip]);
    }

    #[test]
    fn test_validate_requires_error_scenario() {
        let mut draft = filled();
        draft.error = None;
        assert_eq!(draft.validate(), Err(DraftError::NoErrorScenario));
    }

    #[test]
    fn test_validate_rejects_unknown_scenario() {
        let mut draft = filled();
        draft.select_error(42);
        assert_eq!(draft.validate(), Err(DraftError::UnknownErrorScenario(42)));
    }

    #[test]
    fn test_missing_field_message_uses_label() {
        let err = DraftError::MissingField(DraftField::MerchantName);
        assert_eq!(err.to_string(), "Merchant Name is required");
    }

    // ==================== UseChip tests ====================

    #[test]
    fn test_use_chip_values() {
        assert_eq!(UseChip::Online.as_str(), "Online Transaction");
        assert_eq!(UseChip::from_value("Swipe Transaction"), Some(UseChip::Swipe));
        assert_eq!(UseChip::from_value(""), None);
        assert_eq!(UseChip::from_value("Tap Transaction"), None);
    }

    #[test]
    fn test_field_keys_match_request_keys() {
        let value = serde_json::to_value(filled().validate().unwrap()).unwrap();
        for field in DraftField::ALL {
            assert_eq!(value[field.key()], format!("{}-value", field.key()));
        }
    }
}
