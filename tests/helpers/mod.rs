//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use parkhub_core::config::AppConfig;
use parkhub_core::config::auth::AuthConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (empty object when the body is not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application backed by fresh in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                jwt_ttl_hours: 1,
            },
            ..AppConfig::default()
        };

        let cors = config.server.cors.clone();
        let state = parkhub_api::app::build_state(config);
        let router = parkhub_api::app::build_app(state, &cors);

        Self { router }
    }

    /// Register a user and return their ID
    pub async fn register(&self, username: &str, password: &str, role: Option<&str>) -> Uuid {
        let mut body = serde_json::json!({
            "username": username,
            "password": password,
            "plate_number": "TEST-0001",
        });
        if let Some(role) = role {
            body["role"] = Value::String(role.to_string());
        }

        let response = self
            .request("POST", "/api/auth/register", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No user id in registration response")
    }

    /// Login and return the JWT
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Register, login, and return the JWT in one step
    pub async fn login_as(&self, username: &str, role: &str) -> String {
        self.register(username, "password123", Some(role)).await;
        self.login(username, "password123").await
    }

    /// Create a parking lot as admin and return its ID
    pub async fn create_lot(&self, admin_token: &str, name: &str, total_spaces: u32) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/lots",
                Some(serde_json::json!({
                    "name": name,
                    "total_spaces": total_spaces,
                })),
                Some(admin_token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Lot creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No lot id in creation response")
    }

    /// Read a lot's reserved-space count
    pub async fn reserved_spaces(&self, token: &str, lot_id: Uuid) -> u64 {
        let response = self
            .request("GET", &format!("/api/lots/{lot_id}"), None, Some(token))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["reserved_spaces"]
            .as_u64()
            .expect("No reserved_spaces in lot response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let request = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| serde_json::json!({}));

        TestResponse { status, body }
    }
}
