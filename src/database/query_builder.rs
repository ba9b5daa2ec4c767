use sqlx::{self, postgres::PgArguments, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::filter::{SqlParam, SqlResult, SqlType};

/// Runs a built [`SqlResult`] with its parameters bound in order.
pub struct QueryBuilder<T> {
    sql: SqlResult,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    pub fn new(sql: SqlResult) -> Self {
        Self { sql, _phantom: std::marker::PhantomData }
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        self.log();
        let mut q = sqlx::query_as::<_, T>(&self.sql.query);
        for p in self.sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        self.log();
        let mut q = sqlx::query_as::<_, T>(&self.sql.query);
        for p in self.sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let row = q.fetch_optional(pool).await?;
        Ok(row)
    }

    fn log(&self) {
        if crate::config::CONFIG.database.enable_query_logging {
            tracing::debug!(query = %self.sql.query, params = ?self.sql.params, "executing");
        }
    }
}

pub fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlParam::Bool(b) => q.bind(*b),
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Decimal(d) => q.bind(*d),
        SqlParam::Null(SqlType::Bool) => q.bind(None::<bool>),
        SqlParam::Null(SqlType::Int) => q.bind(None::<i64>),
        SqlParam::Null(SqlType::Text) => q.bind(None::<String>),
        SqlParam::Null(SqlType::Decimal) => q.bind(None::<rust_decimal::Decimal>),
    }
}
