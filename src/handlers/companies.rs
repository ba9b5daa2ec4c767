// handlers/companies.rs - /companies resource

use axum::extract::{rejection::QueryRejection, Path, Query, State};

use crate::api::ValidatedJson;
use crate::app::AppState;
use crate::database::models::{Company, CompanyDetail, CompanyNew, CompanyUpdate};
use crate::filter::CompanyFilter;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /companies (admin)
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CompanyNew>,
) -> ApiResult<Company> {
    let company = state.companies().create(body).await?;
    Ok(ApiResponse::created("company", company))
}

/// GET /companies?name=&minEmployees=&maxEmployees=
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<CompanyFilter>, QueryRejection>,
) -> ApiResult<Vec<Company>> {
    let Query(filter) = filter?;
    let companies = state.companies().find_all(&filter).await?;
    Ok(ApiResponse::ok("companies", companies))
}

/// GET /companies/:handle, including the company's jobs
pub async fn get(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<CompanyDetail> {
    let company = state.companies().get(&handle).await?;
    Ok(ApiResponse::ok("company", company))
}

/// PATCH /companies/:handle (admin)
pub async fn update(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    ValidatedJson(body): ValidatedJson<CompanyUpdate>,
) -> ApiResult<Company> {
    let company = state.companies().update(&handle, body).await?;
    Ok(ApiResponse::ok("company", company))
}

/// DELETE /companies/:handle (admin)
pub async fn remove(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<String> {
    state.companies().remove(&handle).await?;
    Ok(ApiResponse::ok("deleted", handle))
}
