//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use jobboard_core::config::AppConfig;
use jobboard_database::Database;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store shared with the router, for direct assertions
    pub db: Database,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.argon2_memory_kib = 1024;
        config.auth.argon2_iterations = 1;

        let db = Database::in_memory();
        let router =
            jobboard_api::build_app(config, db.clone()).expect("Failed to build application");

        Self { router, db }
    }

    /// Register a user through the API
    pub async fn create_user(&self, email: &str, password: &str, name: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/user/create/",
            Some(json!({ "email": email, "password": password, "name": name })),
            None,
        )
        .await
    }

    /// Request a token through the API and return its key
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/user/token/",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    /// Register a user and return a token for them
    pub async fn user_with_token(&self, email: &str) -> String {
        let response = self.create_user(email, "testpass123", "Test User").await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        self.login(email, "testpass123").await
    }

    /// Create a portal and a job description, returning their ids
    pub async fn job_links(&self, token: &str, portal_name: &str) -> (i64, i64) {
        let portal = self
            .request(
                "POST",
                "/api/job/portals/",
                Some(json!({ "name": portal_name, "description": "Job listings" })),
                Some(token),
            )
            .await;
        assert_eq!(portal.status, StatusCode::CREATED, "{:?}", portal.body);

        let description = self
            .request(
                "POST",
                "/api/job/descriptions/",
                Some(json!({ "role": "Java Developer", "description_text": "SpringBoot" })),
                Some(token),
            )
            .await;
        assert_eq!(description.status, StatusCode::CREATED, "{:?}", description.body);

        (
            portal.body["id"].as_i64().expect("portal id"),
            description.body["id"].as_i64().expect("description id"),
        )
    }

    /// Send a request, authenticating with `Token <token>` when given
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Token {t}"));
        self.send(method, path, body, authorization.as_deref()).await
    }

    /// Send a request with a raw `Authorization` header value
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

impl TestResponse {
    /// Field-level messages for `field`
    pub fn field_errors(&self, field: &str) -> Vec<String> {
        self.body["details"][field]
            .as_array()
            .map(|messages| {
                messages
                    .iter()
                    .filter_map(|m| m.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}
