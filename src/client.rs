use reqwest::blocking::Client;
use thiserror::Error;

use crate::assessment::Assessment;
use crate::request::build_request;
use crate::schema::v1::{AnalysisResult, PredictionRequest, PredictionResponse};
use crate::scores::fallback::compute_fallback;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("remote rejected request (status {status})")]
    RemoteRejected { status: u16 },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

/// Client for the remote viability scoring service. One POST per
/// submission; no retry, no explicit timeout (transport defaults apply).
#[derive(Debug)]
pub struct ViabilityClient {
    client: Client,
    endpoint: String,
}

impl ViabilityClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let endpoint = format!("{}/predict", base_url.trim_end_matches('/'));
        let client = Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Scores an assessment. Never fails outward: transport errors, non-2xx
    /// statuses, and undecodable bodies are all logged and substituted with
    /// the local heuristic computed from the already-built request.
    pub fn predict(&self, assessment: &Assessment) -> AnalysisResult {
        let request = build_request(assessment);
        match self.predict_remote(&request) {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(
                    %error,
                    endpoint = %self.endpoint,
                    "remote prediction unavailable, using local heuristic"
                );
                compute_fallback(&request)
            }
        }
    }

    fn predict_remote(&self, request: &PredictionRequest) -> Result<AnalysisResult, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            // The error body's text is discarded, not surfaced.
            return Err(ClientError::RemoteRejected {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let parsed: PredictionResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                message: e.to_string(),
            })?;
        Ok(AnalysisResult::from(parsed))
    }
}
