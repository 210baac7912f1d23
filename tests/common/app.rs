//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use doticon::models::AppConfig;
use doticon::server::{build_router, create_app_state};
use doticon::services::SessionStore;

use super::fixtures::MultipartBody;

/// Test application with router and direct access to the session store
pub struct TestApp {
    router: axum::Router,
    pub sessions: Arc<SessionStore>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = create_app_state(config);
        let sessions = state.sessions.clone();
        let router = build_router(state);

        Self { router, sessions }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a multipart body
    pub async fn post_multipart(&self, path: &str, body: MultipartBody) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", body.content_type())
            .body(Body::from(body.into_bytes()))
            .unwrap();
        self.request(request).await
    }

    /// Upload an image and return the session id
    pub async fn upload(&self, png: &[u8]) -> String {
        let response = self
            .post_multipart("/api/image", MultipartBody::new().file("image", png))
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "upload failed: {}",
            response.text()
        );

        let json: serde_json::Value = response.json();
        json["id"].as_str().unwrap().to_string()
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

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Decode the PNG body
    pub fn image(&self) -> image::RgbImage {
        image::load_from_memory(&self.body)
            .expect("Failed to decode PNG response")
            .to_rgb8()
    }
}
