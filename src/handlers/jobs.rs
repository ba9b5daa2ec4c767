// handlers/jobs.rs - /jobs resource

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};

use crate::api::ValidatedJson;
use crate::app::AppState;
use crate::database::models::{Job, JobNew, JobUpdate};
use crate::filter::JobFilter;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /jobs (admin)
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<JobNew>,
) -> ApiResult<Job> {
    let job = state.jobs().create(body).await?;
    Ok(ApiResponse::created("job", job))
}

/// GET /jobs?title=&minSalary=&hasEquity=
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<JobFilter>, QueryRejection>,
) -> ApiResult<Vec<Job>> {
    let Query(filter) = filter?;
    let jobs = state.jobs().find_all(&filter).await?;
    Ok(ApiResponse::ok("jobs", jobs))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Job> {
    let Path(id) = id?;
    Ok(ApiResponse::ok("job", state.jobs().get(id).await?))
}

/// PATCH /jobs/:id (admin). Title, salary and equity only.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    ValidatedJson(body): ValidatedJson<JobUpdate>,
) -> ApiResult<Job> {
    let Path(id) = id?;
    let job = state.jobs().update(id, body).await?;
    Ok(ApiResponse::ok("job", job))
}

pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<i32> {
    let Path(id) = id?;
    state.jobs().remove(id).await?;
    Ok(ApiResponse::ok("deleted", id))
}
