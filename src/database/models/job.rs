use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Equity is rendered as a decimal string, e.g. `"0.5"`.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobNew {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    #[validate(custom(function = "equity_fraction"))]
    pub equity: Option<Decimal>,
    #[serde(alias = "company_handle")]
    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// Jobs cannot move between companies, so the handle is not updatable.
/// `salary` and `equity` accept `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct JobUpdate {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[validate(range(min = 0))]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[validate(custom(function = "equity_fraction"))]
    pub equity: Option<Option<Decimal>>,
}

fn equity_fraction(equity: &Decimal) -> Result<(), ValidationError> {
    if *equity < Decimal::ZERO || *equity > Decimal::ONE {
        let mut err = ValidationError::new("range");
        err.message = Some("must be between 0 and 1".into());
        return Err(err);
    }
    Ok(())
}
