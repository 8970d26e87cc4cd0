//! Provider directory client.
//!
//! Queries the doctor-directory API with the fixed search parameters from
//! configuration and flattens its nested response into [`Provider`] records.

use super::ProviderDirectory;
use crate::config::DirectoryConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use health_advisor_shared::types::Provider;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// HTTP implementation of [`ProviderDirectory`].
#[derive(Clone)]
pub struct HttpProviderDirectory {
    client: reqwest::Client,
    config: DirectoryConfig,
}

/// Directory API response envelope.
#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    #[serde(default)]
    data: Vec<DoctorRecord>,
}

#[derive(Debug, Deserialize)]
struct DoctorRecord {
    profile: DoctorProfile,
    #[serde(default)]
    practices: Vec<Practice>,
}

#[derive(Debug, Deserialize)]
struct DoctorProfile {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct Practice {
    #[serde(default)]
    phones: Vec<PracticePhone>,
}

#[derive(Debug, Deserialize)]
struct PracticePhone {
    number: String,
}

impl HttpProviderDirectory {
    pub fn new(client: reqwest::Client, config: DirectoryConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ProviderDirectory for HttpProviderDirectory {
    async fn find_providers(&self) -> Result<Vec<Provider>, ApiError> {
        let url = format!("{}/doctors", self.config.base_url);
        let location = format!(
            "{},{},{}",
            self.config.latitude, self.config.longitude, self.config.radius_km
        );
        let skip = self.config.skip.to_string();
        let limit = self.config.limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("specialty_uid", self.config.specialty.as_str()),
                ("location", location.as_str()),
                ("skip", skip.as_str()),
                ("limit", limit.as_str()),
                ("user_key", self.config.api_key.expose_secret().as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "directory response");

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "directory returned {}: {}",
                status, body
            )));
        }

        let parsed: DirectoryResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Upstream(format!("malformed directory response: {}", e)))?;

        let providers: Vec<Provider> = parsed
            .data
            .into_iter()
            .filter_map(|doctor| {
                let phone = doctor
                    .practices
                    .first()
                    .and_then(|p| p.phones.first())
                    .map(|p| p.number.clone())?;
                Some(Provider {
                    name: format!(
                        "{} {}",
                        doctor.profile.first_name, doctor.profile.last_name
                    ),
                    phone,
                })
            })
            .collect();

        tracing::info!(count = providers.len(), "directory lookup complete");

        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_response() {
        let body = r#"{
            "data": [
                {
                    "profile": {"first_name": "Jane", "last_name": "Doe"},
                    "practices": [{"phones": [{"number": "+14155550100"}]}]
                },
                {
                    "profile": {"first_name": "No", "last_name": "Phone"},
                    "practices": [{"phones": []}]
                }
            ]
        }"#;

        let parsed: DirectoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].profile.first_name, "Jane");
        assert_eq!(parsed.data[0].practices[0].phones[0].number, "+14155550100");
        assert!(parsed.data[1].practices[0].phones.is_empty());
    }

    #[test]
    fn test_parse_empty_response() {
        let parsed: DirectoryResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(parsed.data.is_empty());

        // Missing data field defaults to empty
        let parsed: DirectoryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }
}
