use std::fmt;

/// Text shown when the request or response handling fails
pub const PREDICTION_FAILED_MESSAGE: &str = "Error occurred while predicting.";

/// Classification returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    NotFraud,
    Fraud,
}

impl Prediction {
    /// `0` is "not fraud", every other number is "fraud"
    pub fn from_code(code: f64) -> Self {
        if code == 0.0 {
            Prediction::NotFraud
        } else {
            Prediction::Fraud
        }
    }
}

/// What the form shows after a submission settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    NotFraud,
    Fraud,
    Failed,
}

impl PredictionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, PredictionOutcome::Failed)
    }
}

impl From<Prediction> for PredictionOutcome {
    fn from(prediction: Prediction) -> Self {
        match prediction {
            Prediction::NotFraud => PredictionOutcome::NotFraud,
            Prediction::Fraud => PredictionOutcome::Fraud,
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PredictionOutcome::NotFraud => "Not Fraud",
            PredictionOutcome::Fraud => "Fraud",
            PredictionOutcome::Failed => PREDICTION_FAILED_MESSAGE,
        };
        f.write_str(text)
    }
}
