//! Messaging delivery client.
//!
//! Sends a text message through the messaging API and reports the delivery
//! status from its response.

use super::MessageSender;
use crate::config::MessagingConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Delivery status reported by the messaging service.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryReceipt {
    pub status: String,
    #[serde(default)]
    pub sid: Option<String>,
}

/// HTTP implementation of [`MessageSender`].
#[derive(Clone)]
pub struct HttpMessageSender {
    client: reqwest::Client,
    config: MessagingConfig,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    body: &'a str,
    from: &'a str,
    to: String,
}

impl HttpMessageSender {
    pub fn new(client: reqwest::Client, config: MessagingConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl MessageSender for HttpMessageSender {
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, ApiError> {
        let url = format!("{}/Messages", self.config.base_url);

        let request = SendMessageRequest {
            body,
            from: &self.config.from_number,
            // The messaging channel is address-prefixed, as in "whatsapp:+15551234567"
            to: format!("whatsapp:{}", to),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.account_sid,
                Some(self.config.auth_token.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = %status, "messaging response");

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "messaging service returned {}: {}",
                status, text
            )));
        }

        let receipt: DeliveryReceipt = serde_json::from_str(&text)
            .map_err(|e| ApiError::Upstream(format!("malformed messaging response: {}", e)))?;

        tracing::info!(status = %receipt.status, "message dispatched");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delivery_receipt() {
        let receipt: DeliveryReceipt =
            serde_json::from_str(r#"{"status": "sent", "sid": "SM123"}"#).unwrap();
        assert_eq!(receipt.status, "sent");
        assert_eq!(receipt.sid.as_deref(), Some("SM123"));
    }

    #[test]
    fn test_parse_receipt_without_sid() {
        let receipt: DeliveryReceipt = serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert_eq!(receipt.status, "queued");
        assert!(receipt.sid.is_none());
    }

    #[test]
    fn test_destination_is_channel_prefixed() {
        let request = SendMessageRequest {
            body: "hello",
            from: "+15550000000",
            to: format!("whatsapp:{}", "+15551234567"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"], "whatsapp:+15551234567");
    }
}
