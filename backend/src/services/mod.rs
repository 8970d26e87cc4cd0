//! Business logic services

pub mod consultation;

pub use consultation::ConsultationService;
