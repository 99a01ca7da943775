//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
#[allow(dead_code)]
pub mod helpers {
    use ghin_client::{GhinClient, config::Settings};
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    pub const API_PREFIX: &str = "/api/v1";
    pub const TOKEN: &str = "integration-token";
    pub const GOLFER_ID: u64 = 1234567;

    /// Settings pointing at the mock server
    pub fn create_test_settings(server: &MockServer) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = format!("{}{}/", server.uri(), API_PREFIX);
        settings.api.timeout_secs = 5;
        settings
    }

    /// Reqwest-backed client pointing at the mock server
    pub fn create_test_client(server: &MockServer) -> GhinClient {
        GhinClient::new(&create_test_settings(server)).unwrap()
    }

    pub fn login_body() -> Value {
        json!({
            "golfer_user": {
                "golfer_user_token": TOKEN,
                "golfer_id": GOLFER_ID,
                "golfer_user_accepted_terms": true,
                "golfers": [{
                    "ghin_number": GOLFER_ID,
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "club_id": 42,
                    "display": "8.1"
                }]
            }
        })
    }

    /// Full path for an endpoint under the API prefix
    pub fn api_path(endpoint: &str) -> String {
        format!("{}/{}", API_PREFIX, endpoint)
    }

    /// Mount a successful login and a logout handler
    pub async fn mount_session(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(api_path("golfer_login.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path(api_path("users/logout.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(server)
            .await;
    }
}
