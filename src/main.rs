use anyhow::Context;
use tracing_subscriber::EnvFilter;

use jobly_api::app::{router, AppState};
use jobly_api::config;
use jobly_api::database::DatabaseManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Jobly API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("SECRET_KEY must be set outside development");
    }

    let url = config.database_url()?;
    let pool = DatabaseManager::connect(url, &config.database).await?;

    let app = router(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Jobly API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
