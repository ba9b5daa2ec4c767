// handlers/probes.rs - GET / and GET /health

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::DatabaseManager;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Jobly API",
        "version": version,
        "endpoints": {
            "auth": "/auth/token, /auth/register (public)",
            "companies": "/companies[/:handle]",
            "jobs": "/jobs[/:id]",
            "users": "/users[/:username[/jobs/:id]]",
            "technologies": "/technologies[/job/:id | /user/:username | /jobsby/:technology | /jobsfor/:username]",
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "timestamp": now, "database": "unavailable" })),
            )
        }
    }
}
