use sqlx::PgPool;
use tracing::info;

use crate::database::models::{Job, JobNew, JobUpdate};
use crate::database::{DatabaseError, QueryBuilder};
use crate::filter::job::JOB_COLUMNS;
use crate::filter::{Changeset, ColumnMap, JobFilter, PartialUpdate, SqlResult};

use super::ServiceResult;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a job. The company must already exist.
    pub async fn create(&self, data: JobNew) -> ServiceResult<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, salary, equity, company_handle)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            JOB_COLUMNS
        ))
        .bind(&data.title)
        .bind(data.salary)
        .bind(data.equity)
        .bind(&data.company_handle)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::InvalidReference(_) => {
                DatabaseError::InvalidReference(format!("No company: {}", data.company_handle))
            }
            other => other,
        })?;

        info!("Created job {} for {}", job.id, job.company_handle);
        Ok(job)
    }

    pub async fn find_all(&self, filter: &JobFilter) -> ServiceResult<Vec<Job>> {
        let sql = filter.to_sql()?;
        Ok(QueryBuilder::<Job>::new(sql).select_all(&self.pool).await?)
    }

    pub async fn get(&self, id: i32) -> ServiceResult<Job> {
        let job = sqlx::query_as::<_, Job>(&format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(job)
    }

    pub async fn for_company(&self, handle: &str) -> ServiceResult<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs WHERE company_handle = $1 ORDER BY id",
            JOB_COLUMNS
        ))
        .bind(handle)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    /// Title, salary and equity only; a job stays with its company.
    pub async fn update(&self, id: i32, data: JobUpdate) -> ServiceResult<Job> {
        let changes = Changeset::new()
            .set_opt("title", data.title)
            .set_opt("salary", data.salary)
            .set_opt("equity", data.equity);
        let update = PartialUpdate::build(changes, ColumnMap::IDENTITY)?;

        let query = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            update.set_clause(),
            update.next_param(),
            JOB_COLUMNS
        );
        let mut params = update.values;
        params.push(id.into());

        QueryBuilder::<Job>::new(SqlResult { query, params })
            .select_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn remove(&self, id: i32) -> ServiceResult<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!("Removed job {}", id);
        Ok(())
    }
}

pub(crate) fn not_found(id: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("No job: {}", id))
}
