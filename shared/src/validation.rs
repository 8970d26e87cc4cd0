//! Input validation functions
//!
//! Basic presence and positivity checks for intake fields. Anything beyond
//! that is out of scope for this service.

/// Validate height value (in cm)
pub fn validate_height(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be a positive number of centimeters".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be a positive number of kilograms".to_string());
    }
    Ok(())
}

/// Validate a notification destination address
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err("Phone number cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a provider or contact name
pub fn validate_contact_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Contact name cannot be empty".to_string());
    }
    Ok(())
}
