use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::api::validate::email_address;

/// Public view of a user. The password hash never leaves the store layer.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    /// Ids of the jobs this user applied to
    pub jobs: Vec<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<UserCredentials> for User {
    fn from(row: UserCredentials) -> Self {
        Self {
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}

/// Admin-created account; may grant admin rights.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserNew {
    #[validate(length(min = 1, max = 30))]
    pub username: String,
    #[validate(length(min = 5, max = 20))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(length(min = 6, max = 60), custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Self-service signup. Never an admin.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserRegister {
    #[validate(length(min = 1, max = 30))]
    pub username: String,
    #[validate(length(min = 5, max = 20))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(length(min = 6, max = 60), custom(function = "email_address"))]
    pub email: String,
}

impl From<UserRegister> for UserNew {
    fn from(body: UserRegister) -> Self {
        Self {
            username: body.username,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            is_admin: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserUpdate {
    #[validate(length(min = 5, max = 20))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub last_name: Option<String>,
    #[validate(length(min = 6, max = 60), custom(function = "email_address"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserAuth {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
