use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { username: claims.username, is_admin: claims.is_admin }
    }
}

/// Who is making the request. Attached to every request by [`authenticate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Principal {
    Authenticated(AuthUser),
    #[default]
    Anonymous,
}

impl Principal {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Principal::Authenticated(user) => Some(user),
            Principal::Anonymous => None,
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Principal {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Principal>().cloned().unwrap_or_default())
    }
}

/// Route gates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    LoggedIn,
    Admin,
    /// Admin, or the user named by the `:username` path segment
    AdminOrOwner,
}

pub fn authorize<'a>(
    principal: &'a Principal,
    access: Access,
    owner: Option<&str>,
) -> Result<&'a AuthUser, ApiError> {
    let Some(user) = principal.user() else {
        return Err(ApiError::unauthorized("Unauthorized"));
    };

    match access {
        Access::LoggedIn => Ok(user),
        Access::Admin if user.is_admin => Ok(user),
        Access::Admin => Err(ApiError::unauthorized("This activity is restricted to admin users")),
        Access::AdminOrOwner if user.is_admin || owner == Some(user.username.as_str()) => Ok(user),
        Access::AdminOrOwner => {
            Err(ApiError::unauthorized("You do not have permission to access that"))
        }
    }
}

/// Resolves the bearer token, if any, into a [`Principal`]. Never rejects:
/// a missing or bad token just leaves the request anonymous.
pub async fn authenticate(mut request: Request, next: Next) -> Response {
    let principal = match extract_jwt_from_headers(request.headers()) {
        Some(token) => match validate_jwt(token) {
            Ok(claims) => Principal::Authenticated(AuthUser::from(claims)),
            Err(e) => {
                debug!("Ignoring token: {}", e);
                Principal::Anonymous
            }
        },
        None => Principal::Anonymous,
    };

    request.extensions_mut().insert(principal);
    next.run(request).await
}

/// Route layer applying one [`Access`] gate, e.g.
/// `from_fn_with_state(Access::Admin, enforce)`.
pub async fn enforce(
    State(access): State<Access>,
    principal: Principal,
    params: Option<Path<HashMap<String, String>>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let owner = params.as_ref().and_then(|Path(p)| p.get("username")).map(String::as_str);

    match authorize(&principal, access, owner) {
        Ok(user) => debug!(username = %user.username, ?access, "gate passed"),
        Err(e) => {
            debug!(?access, "gate refused: {}", e);
            return Err(e);
        }
    }

    Ok(next.run(request).await)
}

fn extract_jwt_from_headers(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("bearer "))?
        .trim();

    (!token.is_empty()).then_some(token)
}
