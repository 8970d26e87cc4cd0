//! API request and response types

use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Intake submitted to POST /advise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviseRequest {
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Free-text symptom description
    pub symptoms: String,
    /// Destination address for notifications
    pub phone: String,
}

/// Response from POST /advise
///
/// `whatsapp_status` is present only on the high-risk path, where a
/// notification was dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviseResponse {
    /// Advisory sentence; on the high-risk path this is the composite
    /// message offering to book with the selected provider
    pub health_advice: String,
    /// Free-text advice from the generative service
    pub ai_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_status: Option<String>,
}

/// Request body for POST /confirm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub phone: String,
    pub nutritionist_name: String,
}

/// Response from POST /confirm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    pub confirmation: String,
    pub whatsapp_status: String,
}

/// A healthcare provider resolved by the directory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub phone: String,
}
