#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pathway_service::config::PathwayConfig;
use pathway_service::services::{LatencyProfile, MockCurriculumGenerator};
use pathway_service::startup::{build_router, AppState, Application};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Config bound to a random port with no simulated latency.
pub fn test_config() -> PathwayConfig {
    let mut config = PathwayConfig::default();
    config.common.port = 0;
    config.latency.enabled = false;
    config
}

/// In-process router using the template generator.
pub fn router() -> Router {
    router_with(test_config())
}

pub fn router_with(config: PathwayConfig) -> Router {
    build_router(AppState::with_mock_generator(config))
}

/// In-process router whose generator fails every call.
pub fn failing_router() -> Router {
    let state = AppState {
        config: test_config(),
        generator: Arc::new(
            MockCurriculumGenerator::new(LatencyProfile::disabled()).with_enabled(false),
        ),
    };
    build_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_json(router: Router, path: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(router, request).await
}

pub async fn get(router: Router, path: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");

    send(router, request).await
}

/// A running server on a random port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: PathwayConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// A complete, valid body for each generation endpoint.
pub fn valid_body(path: &str) -> Value {
    use serde_json::json;

    match path {
        "/generateCourseTitles" => json!({"jobTitle": "Software Engineer"}),
        "/refineCourseTitles" => json!({
            "jobTitle": "Software Engineer",
            "courseTitles": ["A", "B", "C", "D", "E"],
            "additionalContext": "More cloud content",
        }),
        "/generateModuleTitles" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
        }),
        "/refineModuleTitles" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitles": ["M1", "M2", "M3", "M4", "M5"],
            "additionalContext": "Fewer theory modules",
        }),
        "/generateSegmentOverview" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
        }),
        "/refineSegmentOverview" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
            "segments": [
                {"title": "S1", "type": "Info"},
                {"title": "S2", "type": "Info"},
                {"title": "S3", "type": "Research"},
                {"title": "S4", "type": "Exercise"},
                {"title": "S5", "type": "Project"},
            ],
            "additionalContext": "Add a case study",
        }),
        "/generateSegmentContent" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
            "segmentTitle": "Hands-on Practice Exercise",
            "segmentType": "Exercise",
        }),
        "/refineSegmentContent" => json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
            "segmentTitle": "Hands-on Practice Exercise",
            "segmentType": "Exercise",
            "segmentContent": "# Hands-on Practice Exercise",
            "additionalContext": "Include a pairing activity",
        }),
        other => panic!("no valid body for {}", other),
    }
}

/// Each generation endpoint with its required fields.
pub const ENDPOINTS: &[(&str, &[&str])] = &[
    ("/generateCourseTitles", &["jobTitle"]),
    (
        "/refineCourseTitles",
        &["jobTitle", "courseTitles", "additionalContext"],
    ),
    ("/generateModuleTitles", &["jobTitle", "courseTitle"]),
    (
        "/refineModuleTitles",
        &["jobTitle", "courseTitle", "moduleTitles", "additionalContext"],
    ),
    (
        "/generateSegmentOverview",
        &["jobTitle", "courseTitle", "moduleTitle"],
    ),
    (
        "/refineSegmentOverview",
        &[
            "jobTitle",
            "courseTitle",
            "moduleTitle",
            "segments",
            "additionalContext",
        ],
    ),
    (
        "/generateSegmentContent",
        &[
            "jobTitle",
            "courseTitle",
            "moduleTitle",
            "segmentTitle",
            "segmentType",
        ],
    ),
    (
        "/refineSegmentContent",
        &[
            "jobTitle",
            "courseTitle",
            "moduleTitle",
            "segmentTitle",
            "segmentType",
            "segmentContent",
            "additionalContext",
        ],
    ),
];
