// handlers/users.rs - /users resource
//
// Creating and listing users is admin-only. Reading, changing or deleting
// one user is allowed to admins and to that user.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};

use crate::api::ValidatedJson;
use crate::app::AppState;
use crate::auth::generate_jwt;
use crate::database::models::{User, UserDetail, UserNew, UserUpdate};
use crate::error::ApiError;
use crate::middleware::{response::user_with_token, ApiResponse, ApiResult};

/// POST /users (admin) - unlike /auth/register this may create admins
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserNew>,
) -> Result<Response, ApiError> {
    let user = state.users().register(body).await?;
    let token = generate_jwt(&user.username, user.is_admin)?;
    Ok(user_with_token(user, token))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::ok("users", state.users().find_all().await?))
}

/// GET /users/:username, with the ids of jobs applied to
pub async fn get(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<UserDetail> {
    let user = state.users().get(&username).await?;
    Ok(ApiResponse::ok("user", user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(body): ValidatedJson<UserUpdate>,
) -> ApiResult<User> {
    let user = state.users().update(&username, body).await?;
    Ok(ApiResponse::ok("user", user))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<String> {
    state.users().remove(&username).await?;
    Ok(ApiResponse::ok("deleted", username))
}

/// POST /users/:username/jobs/:id - echoes the id as a string
pub async fn apply(
    State(state): State<AppState>,
    params: Result<Path<(String, i32)>, PathRejection>,
) -> ApiResult<String> {
    let Path((username, job_id)) = params?;
    state.users().apply_to_job(&username, job_id).await?;
    Ok(ApiResponse::ok("applied", job_id.to_string()))
}
