pub mod error;
mod prompts;
mod types;

pub use error::{GeminiError, Result};

use serde::Deserialize;
use tracing::debug;

use ulascan_common::AspectScores;

use prompts::{PROMPT_ANALYZE, PROMPT_SUMMARIZE};
use types::{GenerateRequest, GenerateResponse};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-pro-latest";

/// Client for the generative text backend, invoked in JSON mode. Each call
/// is a single-shot prompt; no conversation state is kept between calls.
pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Score the four review aspects. The backend computes the
    /// positive-share percentage per aspect; this only decodes its reply.
    pub async fn analyze(&self, reviews: &str) -> Result<AspectScores> {
        let raw = self
            .generate_json(&format!("{PROMPT_ANALYZE}\n{reviews}"))
            .await?;
        serde_json::from_str(&raw).map_err(|e| GeminiError::Decode(e.to_string()))
    }

    /// Summarize the reviews in at most five sentences.
    pub async fn summarize(&self, reviews: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct SummaryReply {
            #[serde(default)]
            summary: String,
        }

        let raw = self
            .generate_json(&format!("{PROMPT_SUMMARIZE}\n{reviews}"))
            .await?;
        let reply: SummaryReply =
            serde_json::from_str(&raw).map_err(|e| GeminiError::Decode(e.to_string()))?;
        Ok(reply.summary)
    }

    async fn generate_json(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Gemini generate request");

        let response = self
            .http
            .post(&url)
            .json(&GenerateRequest::json_mode(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Decode(e.to_string()))?;

        parsed.text().ok_or(GeminiError::Empty)
    }
}
