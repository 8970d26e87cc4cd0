//! Clients for the three upstream collaborators.
//!
//! Each collaborator is a trait so handlers depend on behavior, not on a
//! concrete HTTP client, and tests can substitute doubles. The HTTP
//! implementations share one `reqwest::Client` with explicit timeouts.

use crate::config::HttpClientConfig;
use crate::error::ApiError;
use anyhow::Result;
use async_trait::async_trait;
use health_advisor_shared::types::Provider;
use std::time::Duration;

mod advice;
mod directory;
mod notifier;

pub use advice::{build_diet_prompt, HttpAdviceGenerator};
pub use directory::HttpProviderDirectory;
pub use notifier::{DeliveryReceipt, HttpMessageSender};

/// Resolves healthcare providers by the configured specialty and location.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Query the directory with the fixed search parameters.
    async fn find_providers(&self) -> Result<Vec<Provider>, ApiError>;
}

/// Produces free-text advice for an intake.
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate_advice(
        &self,
        height_cm: f64,
        weight_kg: f64,
        symptoms: &str,
    ) -> Result<String, ApiError>;
}

/// Delivers a text message to a destination address.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, ApiError>;
}

/// Build the shared outbound HTTP client.
///
/// Upstream calls carry explicit connect and total timeouts; a hung
/// collaborator must not hold a request open indefinitely.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()?;
    Ok(client)
}
