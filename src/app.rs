use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config;
use crate::error::ApiError;
use crate::handlers;
use crate::middleware::{authenticate, enforce, Access};
use crate::services::{CompanyService, JobService, TechnologyService, UserService};

/// Shared per-request state. Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn companies(&self) -> CompanyService {
        CompanyService::new(self.pool.clone())
    }

    pub fn jobs(&self) -> JobService {
        JobService::new(self.pool.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.pool.clone())
    }

    pub fn technologies(&self) -> TechnologyService {
        TechnologyService::new(self.pool.clone())
    }
}

pub fn router(state: AppState) -> Router {
    let api = &config::config().api;

    let mut app = Router::new()
        .route("/", get(handlers::probes::root))
        .route("/health", get(handlers::probes::health))
        .merge(auth_routes())
        .merge(company_routes())
        .merge(job_routes())
        .merge(user_routes())
        .merge(technology_routes())
        .fallback(|| async { ApiError::not_found("Not Found") })
        .layer(from_fn(authenticate))
        .layer(RequestBodyLimitLayer::new(api.max_request_size_bytes))
        .layer(CorsLayer::permissive());

    if api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/token", post(auth::token))
        .route("/auth/register", post(auth::register))
}

fn company_routes() -> Router<AppState> {
    use handlers::companies;
    let admin = || from_fn_with_state(Access::Admin, enforce);

    Router::new()
        .route("/companies", get(companies::list))
        .route("/companies", post(companies::create).route_layer(admin()))
        .route("/companies/:handle", get(companies::get))
        .route(
            "/companies/:handle",
            patch(companies::update)
                .delete(companies::remove)
                .route_layer(admin()),
        )
}

fn job_routes() -> Router<AppState> {
    use handlers::jobs;
    let admin = || from_fn_with_state(Access::Admin, enforce);

    Router::new()
        .route("/jobs", get(jobs::list))
        .route("/jobs", post(jobs::create).route_layer(admin()))
        .route("/jobs/:id", get(jobs::get))
        .route("/jobs/:id", patch(jobs::update).delete(jobs::remove).route_layer(admin()))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;
    let admin = || from_fn_with_state(Access::Admin, enforce);
    let owner = || from_fn_with_state(Access::AdminOrOwner, enforce);

    Router::new()
        .route("/users", post(users::create).get(users::list).route_layer(admin()))
        .route(
            "/users/:username",
            get(users::get)
                .patch(users::update)
                .delete(users::remove)
                .route_layer(owner()),
        )
        .route("/users/:username/jobs/:id", post(users::apply).route_layer(owner()))
}

fn technology_routes() -> Router<AppState> {
    use handlers::technologies;
    let admin = || from_fn_with_state(Access::Admin, enforce);
    let owner = || from_fn_with_state(Access::AdminOrOwner, enforce);

    Router::new()
        .route("/technologies", get(technologies::list))
        .route("/technologies", post(technologies::create).route_layer(admin()))
        .route("/technologies/job/:id", get(technologies::for_job))
        .route(
            "/technologies/user/:username",
            get(technologies::for_user).route_layer(owner()),
        )
        .route("/technologies/jobsby/:technology", get(technologies::jobs_by))
        .route(
            "/technologies/jobsfor/:username",
            get(technologies::jobs_for).route_layer(owner()),
        )
}
