//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use loanbook::server::model::app::AppState;
use loanbook_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait converting a [`TestContext`] into the application state.
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Read a response body and deserialize it as JSON.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}
