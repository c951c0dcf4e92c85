//! Lab Service
//!
//! A small standalone service with a liveness probe and a greeting endpoint.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

/// Longest name echoed back, in characters
pub const MAX_NAME_CHARS: usize = 64;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct HelloRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

pub fn lab_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hello", post(hello))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /hello
pub async fn hello(Json(req): Json<HelloRequest>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: greeting(&req.name),
    })
}

/// Trim surrounding whitespace, then keep at most [`MAX_NAME_CHARS`] characters
pub fn greeting(name: &str) -> String {
    let name: String = name.trim().chars().take(MAX_NAME_CHARS).collect();
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_hello(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/hello")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_greeting_trims_and_truncates() {
        assert_eq!(greeting("Aziz"), "Hello, Aziz!");
        assert_eq!(greeting("  Aziz \n"), "Hello, Aziz!");
        assert_eq!(greeting(""), "Hello, !");

        let long = "x".repeat(100);
        assert_eq!(greeting(&long), format!("Hello, {}!", "x".repeat(64)));
    }

    #[test]
    fn test_greeting_counts_characters_not_bytes() {
        let name = "é".repeat(70);
        let message = greeting(&name);
        assert_eq!(message.chars().filter(|&c| c == 'é').count(), 64);
    }

    #[tokio::test]
    async fn test_health() {
        let response = lab_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_hello() {
        let response = lab_router()
            .oneshot(post_hello(r#"{"name":"  Aziz  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Hello, Aziz!");
    }

    #[tokio::test]
    async fn test_hello_requires_name() {
        let response = lab_router().oneshot(post_hello("{}")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
