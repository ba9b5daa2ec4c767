// handlers/auth.rs - POST /auth/token, POST /auth/register

use axum::extract::State;

use crate::api::ValidatedJson;
use crate::app::AppState;
use crate::auth::generate_jwt;
use crate::database::models::{UserAuth, UserRegister};
use crate::middleware::{ApiResponse, ApiResult};

/// POST /auth/token - exchange username/password for a JWT
pub async fn token(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserAuth>,
) -> ApiResult<String> {
    let user = state.users().authenticate(&body.username, &body.password).await?;
    let token = generate_jwt(&user.username, user.is_admin)?;

    tracing::info!("Issued token for {}", user.username);
    Ok(ApiResponse::ok("token", token))
}

/// POST /auth/register - self-service signup, never grants admin
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserRegister>,
) -> ApiResult<String> {
    let user = state.users().register(body.into()).await?;
    let token = generate_jwt(&user.username, user.is_admin)?;

    Ok(ApiResponse::created("token", token))
}
