//! BMI evaluation module
//!
//! Classifies an intake into an advisory category from height and weight.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No side effects, fully deterministic
//! 2. **Guarded Arithmetic**: Non-positive height is rejected before the
//!    division, so the formula can never divide by zero

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// BMI value at or above which a consultation is recommended.
pub const HIGH_RISK_BMI_THRESHOLD: f64 = 30.0;

/// Advisory category derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Normal,
    HighRisk,
}

impl RiskCategory {
    /// Fixed human-readable advisory sentence for this category
    pub fn message(&self) -> &'static str {
        match self {
            RiskCategory::Normal => {
                "Your BMI is within a healthy range. Here's a diet chart for you."
            }
            RiskCategory::HighRisk => {
                "It looks like your BMI is in the obese range. We recommend professional help."
            }
        }
    }
}

/// Result of evaluating an intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// BMI value
    pub bmi: f64,
    /// Advisory category
    pub category: RiskCategory,
    /// Fixed advisory sentence for the category
    pub message: String,
}

/// Errors from advisory evaluation
#[derive(Error, Debug, PartialEq)]
pub enum EvaluationError {
    #[error("height must be a positive number of centimeters")]
    InvalidHeight,

    #[error("weight must be a positive number of kilograms")]
    InvalidWeight,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Callers must ensure height is positive; use [`evaluate`] for guarded input.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value into an advisory category
pub fn classify_bmi(bmi: f64) -> RiskCategory {
    if bmi >= HIGH_RISK_BMI_THRESHOLD {
        RiskCategory::HighRisk
    } else {
        RiskCategory::Normal
    }
}

/// Evaluate an intake into an advisory
///
/// Rejects non-positive or non-finite inputs before computing, so the
/// division in the BMI formula is always well-defined.
pub fn evaluate(height_cm: f64, weight_kg: f64) -> Result<Advisory, EvaluationError> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(EvaluationError::InvalidHeight);
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(EvaluationError::InvalidWeight);
    }

    let bmi = calculate_bmi(weight_kg, height_cm);
    let category = classify_bmi(bmi);

    Ok(Advisory {
        bmi,
        category,
        message: category.message().to_string(),
    })
}
