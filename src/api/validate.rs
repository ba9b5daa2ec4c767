use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// JSON body that has been deserialized and passed its `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

pub fn http_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        let mut err = ValidationError::new("url");
        err.message = Some("must be an http(s) URL".into());
        Err(err)
    }
}

/// Something before an `@`, the same rule the users table checks.
pub fn email_address(email: &str) -> Result<(), ValidationError> {
    match email.find('@') {
        Some(at) if at > 0 => Ok(()),
        _ => {
            let mut err = ValidationError::new("email");
            err.message = Some("must be an email address".into());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_requires_scheme() {
        assert!(http_url("http://a.io/logo.png").is_ok());
        assert!(http_url("https://a.io").is_ok());
        assert!(http_url("ftp://a.io").is_err());
        assert!(http_url("a.io").is_err());
    }

    #[test]
    fn email_address_needs_local_part() {
        assert!(email_address("new@email.com").is_ok());
        assert!(email_address("@abcdef").is_err());
        assert!(email_address("no-at-sign").is_err());
    }
}
