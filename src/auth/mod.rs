pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub username: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            username: username.into(),
            is_admin,
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    TokenInvalid(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::TokenInvalid(msg) => write!(f, "Invalid JWT token: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

impl From<JwtError> for crate::error::ApiError {
    fn from(err: JwtError) -> Self {
        tracing::error!("{}", err);
        crate::error::ApiError::internal_server_error("Unable to issue token")
    }
}

/// Signs a token for `username` with the configured secret.
pub fn generate_jwt(username: &str, is_admin: bool) -> Result<String, JwtError> {
    encode_claims(&Claims::new(username, is_admin), &config::config().security.jwt_secret)
}

pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verifies signature and expiry against the configured secret.
pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    decode_claims(token, &config::config().security.jwt_secret)
}

pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| JwtError::TokenInvalid(e.to_string()))
}
