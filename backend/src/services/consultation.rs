//! Consultation service - the advise and confirm workflows
//!
//! Chains the collaborators in a fixed order: advice generation always runs,
//! directory lookup and notification only on the high-risk path.

use crate::error::ApiError;
use crate::state::AppState;
use health_advisor_shared::bmi::{self, RiskCategory};
use health_advisor_shared::types::{
    AdviseRequest, AdviseResponse, ConfirmRequest, ConfirmResponse,
};
use health_advisor_shared::validation::{
    validate_contact_name, validate_height, validate_phone, validate_weight,
};
use tracing::info;

/// Consultation service
pub struct ConsultationService;

impl ConsultationService {
    /// Run the advise workflow for one intake.
    ///
    /// Always calls the advice generator; on a high-risk advisory it also
    /// resolves a provider and dispatches a booking offer to the intake's
    /// contact address.
    pub async fn advise(state: &AppState, req: AdviseRequest) -> Result<AdviseResponse, ApiError> {
        validate_height(req.height).map_err(ApiError::Validation)?;
        validate_weight(req.weight).map_err(ApiError::Validation)?;
        validate_phone(&req.phone).map_err(ApiError::Validation)?;

        let ai_response = state
            .advice
            .generate_advice(req.height, req.weight, &req.symptoms)
            .await?;

        // Validation above guarantees positive finite inputs
        let advisory = bmi::evaluate(req.height, req.weight)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        info!(bmi = advisory.bmi, category = ?advisory.category, "intake evaluated");

        if advisory.category == RiskCategory::Normal {
            return Ok(AdviseResponse {
                health_advice: advisory.message,
                ai_response,
                whatsapp_status: None,
            });
        }

        let providers = state.directory.find_providers().await?;
        let provider = providers.first().cloned().ok_or_else(|| {
            ApiError::NoProviderFound("no providers available for the configured search".to_string())
        })?;

        let offer = compose_booking_offer(&advisory.message, &provider.name);
        let receipt = state.notifier.send(&req.phone, &offer).await?;

        Ok(AdviseResponse {
            health_advice: offer,
            ai_response,
            whatsapp_status: Some(receipt.status),
        })
    }

    /// Run the confirm workflow: compose the confirmation and dispatch it.
    pub async fn confirm(
        state: &AppState,
        req: ConfirmRequest,
    ) -> Result<ConfirmResponse, ApiError> {
        validate_phone(&req.phone).map_err(ApiError::Validation)?;
        validate_contact_name(&req.nutritionist_name).map_err(ApiError::Validation)?;

        let confirmation = compose_confirmation(&req.nutritionist_name);
        let receipt = state.notifier.send(&req.phone, &confirmation).await?;

        Ok(ConfirmResponse {
            confirmation,
            whatsapp_status: receipt.status,
        })
    }
}

/// Compose the booking offer sent on the high-risk path.
pub fn compose_booking_offer(advisory_message: &str, provider_name: &str) -> String {
    format!(
        "{} Do you want to book an appointment with {}?",
        advisory_message, provider_name
    )
}

/// Compose the fixed confirmation message naming the contact.
pub fn compose_confirmation(provider_name: &str) -> String {
    format!(
        "Appointment with {} has been booked. We'll confirm it via call.",
        provider_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_offer_names_provider() {
        let offer = compose_booking_offer("You should see a specialist.", "Jane Doe");
        assert!(offer.starts_with("You should see a specialist."));
        assert!(offer.contains("Jane Doe"));
        assert!(offer.ends_with('?'));
    }

    #[test]
    fn test_confirmation_names_provider() {
        let confirmation = compose_confirmation("Dr. A");
        assert!(confirmation.contains("Dr. A"));
        assert!(confirmation.contains("booked"));
    }
}
