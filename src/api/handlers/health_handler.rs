//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub store: StoreHealth,
}

/// User store health with optional error message.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Root endpoint
pub async fn root() -> &'static str {
    "Welcome to User Registry"
}

/// Health check endpoint - verifies the user store answers.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = match state.user_service.count_users().await {
        Ok(users) => StoreHealth {
            status: "healthy",
            users: Some(users),
            error: None,
        },
        Err(e) => StoreHealth {
            status: "unhealthy",
            users: None,
            error: Some(e.to_string()),
        },
    };

    let status_code = if store.error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if store.error.is_none() { "healthy" } else { "degraded" },
        services: ServiceStatus { store },
    };

    (status_code, Json(response)).into_response()
}
