// handlers/technologies.rs - /technologies resource

use axum::extract::{rejection::PathRejection, Path, State};

use crate::api::ValidatedJson;
use crate::app::AppState;
use crate::database::models::{Job, Technology, TechnologyNew};
use crate::middleware::{ApiResponse, ApiResult};

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Technology>> {
    Ok(ApiResponse::ok("technologies", state.technologies().find_all().await?))
}

/// POST /technologies (admin) - tag a job and/or a user
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TechnologyNew>,
) -> ApiResult<Technology> {
    let added = state.technologies().create(body).await?;
    Ok(ApiResponse::ok("added", added))
}

pub async fn for_job(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Vec<String>> {
    let Path(id) = id?;
    Ok(ApiResponse::ok("technologies", state.technologies().for_job(id).await?))
}

pub async fn for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Vec<String>> {
    let tags = state.technologies().for_user(&username).await?;
    Ok(ApiResponse::ok("technologies", tags))
}

/// GET /technologies/jobsby/:technology
pub async fn jobs_by(
    State(state): State<AppState>,
    Path(technology): Path<String>,
) -> ApiResult<Vec<Job>> {
    let jobs = state.technologies().jobs_by_technology(&technology).await?;
    Ok(ApiResponse::ok("jobs", jobs))
}

/// GET /technologies/jobsfor/:username - jobs matching the user's tags
pub async fn jobs_for(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Vec<Job>> {
    let jobs = state.technologies().jobs_for_user(&username).await?;
    Ok(ApiResponse::ok("jobs", jobs))
}
