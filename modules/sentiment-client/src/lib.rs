pub mod error;

pub use error::{Result, SentimentError};

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;

use ulascan_common::SentimentCounts;

#[derive(Serialize)]
struct PredictRequest<'a> {
    statements: &'a [String],
}

/// Client for the external sentiment prediction service. The service
/// classifies each statement as positive or negative and may abstain, so
/// the returned counts need not sum to the number of statements.
pub struct SentimentClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SentimentClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Classify a batch of review texts into positive/negative counts.
    pub async fn predict(&self, statements: &[String]) -> Result<SentimentCounts> {
        tracing::debug!(count = statements.len(), "Sending statements for prediction");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&PredictRequest { statements })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        // The service reports its own failures as a bare 500.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return Err(SentimentError::ModelServer);
        }

        serde_json::from_str(&body).map_err(|e| SentimentError::Decode(e.to_string()))
    }
}
