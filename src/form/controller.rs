use chrono::{DateTime, Local};

use super::draft::{DraftError, DraftField, TransactionDraft};
use crate::background::{spawn_job, AsyncJob};
use crate::prediction::{Prediction, PredictionClient, PredictionOutcome};

/// Where the form is in its submit cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Resolved,
    Failed,
}

/// Form state: the draft being edited, the in-flight request and the last outcome.
///
/// The draft is kept across submissions so a corrected resubmission reuses it.
#[derive(Default)]
pub struct TransactionForm {
    draft: TransactionDraft,
    outcome: Option<PredictionOutcome>,
    resolved_at: Option<DateTime<Local>>,
    job: Option<AsyncJob<Prediction>>,
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    pub fn select_error(&mut self, code: u8) {
        self.draft.select_error(code);
    }

    pub fn is_submitting(&self) -> bool {
        self.job.as_ref().map(|j| j.is_running()).unwrap_or(false)
    }

    pub fn outcome(&self) -> Option<PredictionOutcome> {
        self.outcome
    }

    /// Local time the current outcome arrived
    pub fn resolved_at(&self) -> Option<DateTime<Local>> {
        self.resolved_at
    }

    pub fn state(&self) -> SubmissionState {
        if self.is_submitting() {
            return SubmissionState::Submitting;
        }
        match self.outcome {
            None => SubmissionState::Idle,
            Some(PredictionOutcome::Failed) => SubmissionState::Failed,
            Some(_) => SubmissionState::Resolved,
        }
    }

    /// Validate the draft and send it to the prediction service in the background.
    ///
    /// Returns `Ok(false)` without doing anything while a request is in flight.
    /// An incomplete draft is rejected and leaves the form untouched.
    pub fn submit(&mut self, client: &PredictionClient) -> Result<bool, DraftError> {
        if self.is_submitting() {
            tracing::warn!("Prediction request already in flight, ignoring submit");
            return Ok(false);
        }
        let request = self.draft.validate()?;

        self.outcome = None;
        self.resolved_at = None;

        let client = client.clone();
        tracing::info!(
            "Submitting transaction (error scenario {}) to {}",
            request.error,
            client.url()
        );
        self.job = Some(spawn_job(move || async move {
            let prediction = client.predict(&request).await?;
            Ok::<_, anyhow::Error>(prediction)
        }));
        Ok(true)
    }

    /// Pick up the result of the in-flight request, if it has finished.
    /// Every failure ends up as `PredictionOutcome::Failed`; the detail only goes to the log.
    pub fn poll(&mut self) -> Option<PredictionOutcome> {
        let result = self.job.as_mut()?.poll()?;
        self.job = None;

        let outcome = match result {
            Ok(prediction) => {
                tracing::info!("Prediction result: {:?}", prediction);
                PredictionOutcome::from(prediction)
            }
            Err(e) => {
                tracing::error!("Error in prediction: {:#}", e);
                PredictionOutcome::Failed
            }
        };
        self.outcome = Some(outcome);
        self.resolved_at = Some(Local::now());
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::thread;
    use std::time::Duration;

    fn unreachable_client() -> PredictionClient {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = Config::from_base_url(&format!("http://127.0.0.1:{}", port)).unwrap();
        PredictionClient::new(&config).unwrap()
    }

    fn complete_form() -> TransactionForm {
        let mut form = TransactionForm::new();
        for field in DraftField::ALL {
            form.update_field(field, "x");
        }
        form.select_error(5);
        form
    }

    fn wait(form: &mut TransactionForm) -> PredictionOutcome {
        for _ in 0..500 {
            if let Some(outcome) = form.poll() {
                return outcome;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("submission did not settle in time");
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = TransactionForm::new();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.is_submitting());
        assert!(form.outcome().is_none());
    }

    #[test]
    fn test_poll_without_job_is_none() {
        let mut form = TransactionForm::new();
        assert!(form.poll().is_none());
    }

    #[test]
    fn test_incomplete_draft_is_rejected() {
        let mut form = TransactionForm::new();
        form.update_field(DraftField::Month, "3");

        let result = form.submit(&unreachable_client());

        assert_eq!(result, Err(DraftError::MissingField(DraftField::Day)));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_unreachable_service_fails_and_clears_submitting() {
        let mut form = complete_form();

        assert_eq!(form.submit(&unreachable_client()), Ok(true));
        let outcome = wait(&mut form);

        assert_eq!(outcome, PredictionOutcome::Failed);
        assert_eq!(outcome.to_string(), "Error occurred while predicting.");
        assert!(!form.is_submitting());
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(form.resolved_at().is_some());
    }

    #[test]
    fn test_draft_survives_submission() {
        let mut form = complete_form();
        let before = form.draft().clone();

        form.submit(&unreachable_client()).unwrap();
        wait(&mut form);

        assert_eq!(form.draft(), &before);
    }
}
