//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use colorlens::assets::AssetLoader;
use colorlens::server::{build_router, create_app_state};
use colorlens::services::ColorService;

/// Test application with router and direct access to the color service
pub struct TestApp {
    router: axum::Router,
    pub service: Arc<ColorService>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        Self::from_loader(AssetLoader::new(None, None))
    }

    /// Create a test application reading the dataset from `colors_file`
    pub fn with_dataset(colors_file: PathBuf) -> Self {
        Self::from_loader(AssetLoader::new(None, Some(colors_file)))
    }

    fn from_loader(loader: AssetLoader) -> Self {
        // Create application state using shared server module
        let state = create_app_state(Arc::new(loader)).expect("Failed to create app state");

        // Keep a reference for test assertions
        let service = state.service.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, service }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
