// src/routes.rs
use axum::{
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::handlers::signup;
use crate::middleware::security::{security_headers, SecurityPolicy};
use crate::templates::signup::VALIDATE_PATH;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let policy = SecurityPolicy {
        hsts: state.config.enable_hsts,
    };

    Router::new()
        .route("/", get(|| async { Redirect::to("/signup") }))
        .route("/signup", get(signup::signup_page).post(signup::signup_submit))
        .route(VALIDATE_PATH, post(signup::validate_on_change))
        .route("/api/health", get(health_check))
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(policy, security_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
