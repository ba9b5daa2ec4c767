use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::job::Job;
use crate::api::validate::http_url;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: i32,
    pub logo_url: Option<String>,
}

/// A company together with the jobs it posts.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyNew {
    #[validate(length(min = 1, max = 25))]
    pub handle: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0))]
    pub num_employees: i32,
    #[validate(custom(function = "http_url"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub num_employees: Option<i32>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[validate(custom(function = "http_url"))]
    pub logo_url: Option<Option<String>>,
}
