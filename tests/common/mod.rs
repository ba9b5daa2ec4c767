#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tower::ServiceExt;

use jobly_api::app::{router, AppState};
use jobly_api::auth::generate_jwt;
use jobly_api::config::{config, DatabaseConfig};
use jobly_api::database::DatabaseManager;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Router over a pool that never connects. Good for every path that is
/// settled before the store is touched: gates, body and filter validation.
pub fn offline_app() -> Router {
    let settings = DatabaseConfig {
        url: None,
        max_connections: 1,
        connection_timeout: 1,
        enable_query_logging: false,
    };
    let pool = DatabaseManager::connect_lazy("postgres://jobly@127.0.0.1:1/jobly_test", &settings)
        .expect("lazy pool");
    router(AppState::new(pool))
}

/// Router over the database named by `DATABASE_URL`, with the schema applied.
/// `None` when the variable is unset so store-backed tests can skip.
pub async fn database_app() -> Result<Option<Router>> {
    let _ = dotenvy::dotenv();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping store-backed test");
        return Ok(None);
    };

    let pool = DatabaseManager::connect(&url, &config().database).await?;
    // Concurrent CREATE TABLE IF NOT EXISTS can still race in the catalog
    MIGRATED
        .get_or_try_init(|| async { DatabaseManager::migrate(&pool).await })
        .await?;
    Ok(Some(router(AppState::new(pool))))
}

pub fn admin_token() -> String {
    generate_jwt("admin", true).expect("token")
}

pub fn user_token(username: &str) -> String {
    generate_jwt(username, false).expect("token")
}

/// Unique-enough suffix so parallel tests never share rows
pub fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{}{}{}", prefix, std::process::id() % 10_000, nanos % 100_000)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = tokio::time::timeout(Duration::from_secs(10), app.clone().oneshot(request))
        .await??;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000).await?;
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, payload))
}
