use serde::Deserialize;

use super::error::FilterError;
use super::filter_where::WhereBuilder;
use super::types::SqlResult;

pub(crate) const COMPANY_COLUMNS: &str =
    "handle, name, description, num_employees, logo_url";

/// Query-string filters for `GET /companies`. Values stay raw strings until
/// `validate` so that a bad number is reported as a filter error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub min_employees: Option<String>,
    pub max_employees: Option<String>,
}

/// Checked form of [`CompanyFilter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyCriteria {
    pub name: Option<String>,
    pub min_employees: Option<i64>,
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn validate(&self) -> Result<CompanyCriteria, FilterError> {
        let min_employees = parse_number(self.min_employees.as_deref(), "minEmployees")?;
        let max_employees = parse_number(self.max_employees.as_deref(), "maxEmployees")?;

        if let (Some(min), Some(max)) = (min_employees, max_employees) {
            if min > max {
                return Err(FilterError::InvertedRange { min: "minEmployees", max: "maxEmployees" });
            }
        }

        Ok(CompanyCriteria {
            name: self.name.clone().filter(|n| !n.is_empty()),
            min_employees,
            max_employees,
        })
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let criteria = self.validate()?;

        let mut conditions = WhereBuilder::new();
        if let Some(name) = &criteria.name {
            conditions.contains("name", name);
        }
        if let Some(min) = criteria.min_employees {
            conditions.compare("num_employees", ">=", min);
        }
        if let Some(max) = criteria.max_employees {
            conditions.compare("num_employees", "<=", max);
        }

        let query = [
            format!("SELECT {} FROM companies", COMPANY_COLUMNS),
            conditions.to_sql(),
            "ORDER BY name".to_string(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params: conditions.into_params() })
    }
}

pub(crate) fn parse_number(raw: Option<&str>, field: &'static str) -> Result<Option<i64>, FilterError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse::<i64>().map(Some).map_err(|_| FilterError::NotANumber(field)),
    }
}
