use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::outcome::Prediction;
use super::request::PredictionRequest;
use crate::config::Config;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("request to prediction service failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("prediction service answered with HTTP {0}")]
    Status(StatusCode),

    #[error("prediction service returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unexpected prediction response: {0}")]
    MalformedResponse(String),
}

/// Check the response schema and map the `prediction` number to a classification.
///
/// The body must be a JSON object with a numeric `prediction` field.
pub fn classify_response(body: &Value) -> Result<Prediction, PredictionError> {
    let object = body.as_object().ok_or_else(|| {
        PredictionError::MalformedResponse(format!("expected an object, got {}", body))
    })?;
    let value = object
        .get("prediction")
        .ok_or_else(|| PredictionError::MalformedResponse("missing `prediction` field".into()))?;
    let code = value.as_f64().ok_or_else(|| {
        PredictionError::MalformedResponse(format!("`prediction` is not a number: {}", value))
    })?;
    Ok(Prediction::from_code(code))
}

/// HTTP client bound to the prediction route of one service
#[derive(Clone, Debug)]
pub struct PredictionClient {
    http: reqwest::Client,
    url: Url,
}

impl PredictionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let url = config.predict_url()?;
        // No timeout: a request runs until the transport resolves or fails
        let http = reqwest::Client::builder()
            .user_agent(concat!("fraudform/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// POST the request as JSON and classify the answer. Single attempt, no retry.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<Prediction, PredictionError> {
        tracing::debug!("POST {} body={:?}", self.url, request);

        let response = self
            .http
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(PredictionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status));
        }

        let bytes = response.bytes().await.map_err(PredictionError::Transport)?;
        let body: Value = serde_json::from_slice(&bytes)?;
        tracing::info!("Prediction response: {}", body);

        classify_response(&body)
    }
}
