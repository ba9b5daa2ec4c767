use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success body keyed by resource name, e.g. `{"company": {...}}`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub key: &'static str,
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn ok(key: &'static str, data: T) -> Self {
        Self { key, data, status_code: StatusCode::OK }
    }

    /// Create a 201 Created response
    pub fn created(key: &'static str, data: T) -> Self {
        Self { key, data, status_code: StatusCode::CREATED }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return crate::error::ApiError::internal_server_error(
                    "Failed to serialize response data",
                )
                .into_response();
            }
        };

        let mut envelope = Map::new();
        envelope.insert(self.key.to_string(), data_value);
        (self.status_code, Json(Value::Object(envelope))).into_response()
    }
}

/// Body for `POST /users`: the created user plus a token for them.
pub fn user_with_token<T: Serialize>(user: T, token: String) -> Response {
    (StatusCode::CREATED, Json(json!({ "user": user, "token": token }))).into_response()
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
