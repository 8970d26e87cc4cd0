//! Generative advice client.
//!
//! Calls a text-completion API with a prompt built from the intake and
//! returns the first completion, trimmed.

use super::AdviceGenerator;
use crate::config::AdviceConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// HTTP implementation of [`AdviceGenerator`].
#[derive(Clone)]
pub struct HttpAdviceGenerator {
    client: reqwest::Client,
    config: AdviceConfig,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Build the natural-language prompt embedding the intake fields.
pub fn build_diet_prompt(height_cm: f64, weight_kg: f64, symptoms: &str) -> String {
    format!(
        "The user has a height of {} cm, weight of {} kg, and symptoms: {}. \
         Please suggest a diet.",
        height_cm, weight_kg, symptoms
    )
}

impl HttpAdviceGenerator {
    pub fn new(client: reqwest::Client, config: AdviceConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl AdviceGenerator for HttpAdviceGenerator {
    async fn generate_advice(
        &self,
        height_cm: f64,
        weight_kg: f64,
        symptoms: &str,
    ) -> Result<String, ApiError> {
        let prompt = build_diet_prompt(height_cm, weight_kg, symptoms);
        let url = format!("{}/v1/completions", self.config.base_url);

        let request = CompletionRequest {
            model: &self.config.model,
            prompt: &prompt,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "advice generator response");

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "advice generator returned {}: {}",
                status, body
            )));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Upstream(format!("malformed completion response: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.text.trim().to_string())
            .ok_or_else(|| ApiError::Upstream("completion returned no choices".to_string()))?;

        Ok(text)
    }
}
