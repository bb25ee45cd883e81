//! HTTP handlers for the demo server

use axum::{
    extract::Path,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    debug!("[Gateway] Health check");
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Static asset stand-in (plain JavaScript)
pub async fn static_asset(Path(path): Path<String>) -> Response {
    (
        [(CONTENT_TYPE, "application/javascript")],
        format!("// {}\n", path),
    )
        .into_response()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

pub async fn list_users() -> Json<Vec<User>> {
    Json(vec![
        User {
            id: 1,
            name: "ada".to_string(),
        },
        User {
            id: 2,
            name: "grace".to_string(),
        },
    ])
}

/// Echo the JSON request body back
pub async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

pub async fn missing() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not_found", "message": "No such resource" })),
    )
        .into_response()
}

pub async fn fail() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal", "message": "Something went wrong" })),
    )
        .into_response()
}

pub async fn page() -> Html<&'static str> {
    Html("<html><body><h1>reqlog</h1></body></html>")
}
