//! Health Advisor Shared Library
//!
//! This crate contains the pure advisory logic and the API types shared
//! between the backend and its integration tests.

pub mod bmi;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use types::*;
