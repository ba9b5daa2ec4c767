use sqlx::PgPool;
use tracing::info;

use crate::database::models::{Company, CompanyDetail, CompanyNew, CompanyUpdate};
use crate::database::{DatabaseError, QueryBuilder};
use crate::filter::company::COMPANY_COLUMNS;
use crate::filter::{Changeset, ColumnMap, CompanyFilter, PartialUpdate, SqlResult};

use super::{JobService, ServiceResult};

const COMPANY_ALIASES: ColumnMap =
    ColumnMap(&[("numEmployees", "num_employees"), ("logoUrl", "logo_url")]);

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a company. A taken handle or name is a conflict.
    pub async fn create(&self, data: CompanyNew) -> ServiceResult<Company> {
        if self.exists(&data.handle).await? {
            return Err(DatabaseError::Conflict(format!("Duplicate company: {}", data.handle)).into());
        }

        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            COMPANY_COLUMNS
        ))
        .bind(&data.handle)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.num_employees)
        .bind(&data.logo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            // The handle was free a moment ago, so the name is what collided
            DatabaseError::Conflict(_) => {
                DatabaseError::Conflict(format!("Duplicate company name: {}", data.name))
            }
            other => other,
        })?;

        info!("Created company {}", company.handle);
        Ok(company)
    }

    /// All companies matching the filter, ordered by name.
    pub async fn find_all(&self, filter: &CompanyFilter) -> ServiceResult<Vec<Company>> {
        let sql = filter.to_sql()?;
        Ok(QueryBuilder::<Company>::new(sql).select_all(&self.pool).await?)
    }

    pub async fn get(&self, handle: &str) -> ServiceResult<CompanyDetail> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {} FROM companies WHERE handle = $1",
            COMPANY_COLUMNS
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(handle))?;

        let jobs = JobService::new(self.pool.clone()).for_company(handle).await?;
        Ok(CompanyDetail { company, jobs })
    }

    /// Change only the supplied fields. The handle itself is fixed.
    pub async fn update(&self, handle: &str, data: CompanyUpdate) -> ServiceResult<Company> {
        let changes = Changeset::new()
            .set_opt("name", data.name)
            .set_opt("description", data.description)
            .set_opt("numEmployees", data.num_employees)
            .set_opt("logoUrl", data.logo_url);
        let update = PartialUpdate::build(changes, COMPANY_ALIASES)?;

        let query = format!(
            "UPDATE companies SET {} WHERE handle = ${} RETURNING {}",
            update.set_clause(),
            update.next_param(),
            COMPANY_COLUMNS
        );
        let mut params = update.values;
        params.push(handle.into());

        QueryBuilder::<Company>::new(SqlResult { query, params })
            .select_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(handle).into())
    }

    pub async fn remove(&self, handle: &str) -> ServiceResult<()> {
        sqlx::query_scalar::<_, String>("DELETE FROM companies WHERE handle = $1 RETURNING handle")
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(handle))?;

        info!("Removed company {}", handle);
        Ok(())
    }

    async fn exists(&self, handle: &str) -> Result<bool, DatabaseError> {
        let found = sqlx::query_scalar::<_, String>("SELECT handle FROM companies WHERE handle = $1")
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

fn not_found(handle: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("No company: {}", handle))
}
