use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A technology tag on a job or on a user.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Technology {
    pub technology: String,
    pub job_id: Option<i32>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TechnologyNew {
    #[validate(length(min = 1, max = 50))]
    pub technology: String,
    pub job_id: Option<i32>,
    #[validate(length(min = 1, max = 30))]
    pub username: Option<String>,
}
