//! Common test utilities for integration tests
//!
//! Spins up one wiremock server per upstream collaborator and builds the
//! application against them, so tests drive the real router and the real
//! HTTP clients end to end.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use health_advisor_backend::{
    config::{
        AdviceConfig, AppConfig, DirectoryConfig, HttpClientConfig, MessagingConfig, ServerConfig,
    },
    routes,
    state::AppState,
};
use secrecy::Secret;
use tower::ServiceExt;
use wiremock::MockServer;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub directory: MockServer,
    pub advice: MockServer,
    pub messaging: MockServer,
}

impl TestApp {
    /// Create a new test application wired to fresh mock upstreams
    pub async fn new() -> Self {
        let directory = MockServer::start().await;
        let advice = MockServer::start().await;
        let messaging = MockServer::start().await;

        let config = test_config(&directory.uri(), &advice.uri(), &messaging.uri());
        let state = AppState::from_config(config).expect("Failed to build test state");
        let app = routes::create_router(state);

        Self {
            app,
            directory,
            advice,
            messaging,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config(directory_url: &str, advice_url: &str, messaging_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        http: HttpClientConfig {
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        directory: DirectoryConfig {
            base_url: directory_url.to_string(),
            api_key: Secret::new("test-directory-key".to_string()),
            specialty: "dietitian".to_string(),
            latitude: 37.773,
            longitude: -122.413,
            radius_km: 100,
            skip: 0,
            limit: 10,
        },
        advice: AdviceConfig {
            base_url: advice_url.to_string(),
            api_key: Secret::new("test-advice-key".to_string()),
            model: "test-model".to_string(),
            max_tokens: 150,
        },
        messaging: MessagingConfig {
            base_url: messaging_url.to_string(),
            account_sid: "AC_test".to_string(),
            auth_token: Secret::new("test-token".to_string()),
            from_number: "+15550000000".to_string(),
        },
    }
}
