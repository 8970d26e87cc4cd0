//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Construct once**: clients are built at startup, never per request
//! 2. **Cheap cloning**: all fields are Arc'd, cloning is O(1)
//! 3. **Substitutable**: collaborators are trait objects, so tests can
//!    inject doubles without touching the handlers

use crate::clients::{
    build_http_client, AdviceGenerator, HttpAdviceGenerator, HttpMessageSender,
    HttpProviderDirectory, MessageSender, ProviderDirectory,
};
use crate::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Provider directory collaborator
    pub directory: Arc<dyn ProviderDirectory>,
    /// Generative advice collaborator
    pub advice: Arc<dyn AdviceGenerator>,
    /// Messaging delivery collaborator
    pub notifier: Arc<dyn MessageSender>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from explicit collaborators (used by tests to inject doubles)
    pub fn new(
        directory: Arc<dyn ProviderDirectory>,
        advice: Arc<dyn AdviceGenerator>,
        notifier: Arc<dyn MessageSender>,
        config: AppConfig,
    ) -> Self {
        Self {
            directory,
            advice,
            notifier,
            config: Arc::new(config),
        }
    }

    /// Create state with the real HTTP collaborators
    ///
    /// Builds one shared outbound HTTP client with the configured timeouts
    /// and hands it to each collaborator.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let http = build_http_client(&config.http)?;

        let directory = HttpProviderDirectory::new(http.clone(), config.directory.clone());
        let advice = HttpAdviceGenerator::new(http.clone(), config.advice.clone());
        let notifier = HttpMessageSender::new(http, config.messaging.clone());

        Ok(Self::new(
            Arc::new(directory),
            Arc::new(advice),
            Arc::new(notifier),
            config,
        ))
    }
}
