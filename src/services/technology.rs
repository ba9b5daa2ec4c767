use sqlx::PgPool;
use tracing::info;

use crate::database::models::{Job, Technology, TechnologyNew};
use crate::database::DatabaseError;

use super::{job, user, ServiceResult, UserService};

const TECH_COLUMNS: &str = "technology, job_id, username";

const JOB_COLUMNS_QUALIFIED: &str = "j.id, j.title, j.salary, j.equity, j.company_handle";

/// Technology tags and the job/user matching built on them.
#[derive(Clone)]
pub struct TechnologyService {
    pool: PgPool,
}

impl TechnologyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Technology>> {
        let tags = sqlx::query_as::<_, Technology>(&format!(
            "SELECT {} FROM technologies ORDER BY technology",
            TECH_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    pub async fn create(&self, data: TechnologyNew) -> ServiceResult<Technology> {
        let tag = sqlx::query_as::<_, Technology>(&format!(
            "INSERT INTO technologies (technology, job_id, username)
             VALUES ($1, $2, $3)
             RETURNING {}",
            TECH_COLUMNS
        ))
        .bind(&data.technology)
        .bind(data.job_id)
        .bind(&data.username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::InvalidReference(_) => {
                DatabaseError::InvalidReference(missing_target(&data))
            }
            other => other,
        })?;

        info!("Tagged {:?}/{:?} with {}", tag.job_id, tag.username, tag.technology);
        Ok(tag)
    }

    /// Technology names on one job. An untagged job yields an empty list.
    pub async fn for_job(&self, job_id: i32) -> ServiceResult<Vec<String>> {
        let job = sqlx::query_scalar::<_, i32>("SELECT id FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job.is_none() {
            return Err(job::not_found(job_id).into());
        }

        let tags = sqlx::query_scalar::<_, String>(
            "SELECT technology FROM technologies WHERE job_id = $1 ORDER BY technology",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    pub async fn for_user(&self, username: &str) -> ServiceResult<Vec<String>> {
        self.require_user(username).await?;

        let tags = sqlx::query_scalar::<_, String>(
            "SELECT technology FROM technologies WHERE username = $1 ORDER BY technology",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }

    /// Jobs tagged with `technology`, compared case-insensitively.
    pub async fn jobs_by_technology(&self, technology: &str) -> ServiceResult<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT DISTINCT {}
             FROM jobs j
             JOIN technologies t ON t.job_id = j.id
             WHERE lower(t.technology) = lower($1)
             ORDER BY j.title, j.id",
            JOB_COLUMNS_QUALIFIED
        ))
        .bind(technology)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    /// Jobs sharing at least one tag with the user, each listed once.
    pub async fn jobs_for_user(&self, username: &str) -> ServiceResult<Vec<Job>> {
        self.require_user(username).await?;

        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT DISTINCT {}
             FROM jobs j
             JOIN technologies jt ON jt.job_id = j.id
             JOIN technologies ut ON lower(ut.technology) = lower(jt.technology)
             WHERE ut.username = $1
             ORDER BY j.title, j.id",
            JOB_COLUMNS_QUALIFIED
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    async fn require_user(&self, username: &str) -> Result<(), DatabaseError> {
        if UserService::new(self.pool.clone()).exists(username).await? {
            Ok(())
        } else {
            Err(user::not_found(username))
        }
    }
}

// Message for a tag whose job or user is not in the store
fn missing_target(data: &TechnologyNew) -> String {
    match (data.job_id, data.username.as_deref()) {
        (Some(id), None) => format!("No job: {}", id),
        (None, Some(username)) => format!("No user: {}", username),
        (Some(id), Some(username)) => format!("No job or user: {}, {}", id, username),
        (None, None) => "No job or user".to_string(),
    }
}
