use serde::Deserialize;

use super::company::parse_number;
use super::error::FilterError;
use super::filter_where::WhereBuilder;
use super::types::SqlResult;

pub(crate) const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Query-string filters for `GET /jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    pub title: Option<String>,
    pub min_salary: Option<String>,
    pub has_equity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCriteria {
    pub title: Option<String>,
    pub min_salary: Option<i64>,
    /// `Some(true)`: equity above zero. `Some(false)`: zero or unset.
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn validate(&self) -> Result<JobCriteria, FilterError> {
        let min_salary = parse_number(self.min_salary.as_deref(), "minSalary")?;
        let has_equity = match self.has_equity.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(v) if v.eq_ignore_ascii_case("true") => Some(true),
            Some(v) if v.eq_ignore_ascii_case("false") => Some(false),
            Some(_) => return Err(FilterError::NotABoolean("hasEquity")),
        };

        Ok(JobCriteria {
            title: self.title.clone().filter(|t| !t.is_empty()),
            min_salary,
            has_equity,
        })
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let criteria = self.validate()?;

        let mut conditions = WhereBuilder::new();
        if let Some(title) = &criteria.title {
            conditions.contains("title", title);
        }
        if let Some(min) = criteria.min_salary {
            conditions.compare("salary", ">=", min);
        }
        match criteria.has_equity {
            Some(true) => {
                conditions.raw("equity > 0");
            }
            Some(false) => {
                conditions.raw("(equity = 0 OR equity IS NULL)");
            }
            None => {}
        }

        let query = [
            format!("SELECT {} FROM jobs", JOB_COLUMNS),
            conditions.to_sql(),
            "ORDER BY title".to_string(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params: conditions.into_params() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::types::SqlParam;

    fn filter(title: Option<&str>, min: Option<&str>, equity: Option<&str>) -> JobFilter {
        JobFilter {
            title: title.map(String::from),
            min_salary: min.map(String::from),
            has_equity: equity.map(String::from),
        }
    }

    #[test]
    fn no_filters_has_no_where() {
        let sql = JobFilter::default().to_sql().unwrap();
        assert!(!sql.query.contains("WHERE"));
        assert!(sql.query.ends_with("FROM jobs ORDER BY title"));
    }

    #[test]
    fn title_and_min_salary() {
        let sql = filter(Some("test"), Some("100"), None).to_sql().unwrap();
        assert!(sql.query.contains("WHERE title ILIKE $1 AND salary >= $2"));
        assert_eq!(sql.params, vec![SqlParam::from("%test%"), SqlParam::Int(100)]);
    }

    #[test]
    fn equity_true_binds_no_parameter() {
        let sql = filter(Some("dev"), Some("5"), Some("TRUE")).to_sql().unwrap();
        assert!(sql
            .query
            .contains("WHERE title ILIKE $1 AND salary >= $2 AND equity > 0 ORDER BY title"));
        assert_eq!(sql.params.len(), 2);
    }

    #[test]
    fn equity_false_matches_zero_or_null() {
        let sql = filter(None, None, Some("false")).to_sql().unwrap();
        assert!(sql.query.contains("WHERE (equity = 0 OR equity IS NULL) ORDER BY title"));
        assert!(sql.params.is_empty());
    }

    #[test]
    fn bad_equity_flag_is_rejected() {
        let err = filter(None, None, Some("yes")).to_sql().unwrap_err();
        assert_eq!(err, FilterError::NotABoolean("hasEquity"));
    }

    #[test]
    fn bad_salary_is_rejected() {
        let err = filter(None, Some("lol"), None).to_sql().unwrap_err();
        assert_eq!(err, FilterError::NotANumber("minSalary"));
    }
}
