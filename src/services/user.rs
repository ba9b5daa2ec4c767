use sqlx::PgPool;
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::database::models::{User, UserCredentials, UserDetail, UserNew, UserUpdate};
use crate::database::{DatabaseError, QueryBuilder};
use crate::filter::{Changeset, ColumnMap, PartialUpdate, SqlResult};

use super::{job, ServiceError, ServiceResult};

pub(crate) const USER_COLUMNS: &str = "username, first_name, last_name, email, is_admin";

const USER_ALIASES: ColumnMap =
    ColumnMap(&[("firstName", "first_name"), ("lastName", "last_name")]);

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new user with a hashed password.
    pub async fn register(&self, data: UserNew) -> ServiceResult<User> {
        if self.exists(&data.username).await? {
            return Err(
                DatabaseError::Conflict(format!("Duplicate username: {}", data.username)).into()
            );
        }

        let hashed = hash_password(&data.password)?;
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&data.username)
        .bind(&hashed)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.is_admin)
        .fetch_one(&self.pool)
        .await?;

        info!("Registered user {}", user.username);
        Ok(user)
    }

    /// Unknown user and wrong password fail the same way.
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<User> {
        let row = sqlx::query_as::<_, UserCredentials>(&format!(
            "SELECT password, {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) if verify_password(password, &row.password) => Ok(User::from(row)),
            _ => Err(ServiceError::InvalidCredentials),
        }
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY username",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn get(&self, username: &str) -> ServiceResult<UserDetail> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(username))?;

        let jobs = sqlx::query_scalar::<_, i32>(
            "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(UserDetail { user, jobs })
    }

    /// A supplied password is re-hashed before it is stored.
    pub async fn update(&self, username: &str, data: UserUpdate) -> ServiceResult<User> {
        let password = data.password.as_deref().map(hash_password).transpose()?;
        let changes = Changeset::new()
            .set_opt("firstName", data.first_name)
            .set_opt("lastName", data.last_name)
            .set_opt("email", data.email)
            .set_opt("password", password);
        let update = PartialUpdate::build(changes, USER_ALIASES)?;

        let query = format!(
            "UPDATE users SET {} WHERE username = ${} RETURNING {}",
            update.set_clause(),
            update.next_param(),
            USER_COLUMNS
        );
        let mut params = update.values;
        params.push(username.into());

        QueryBuilder::<User>::new(SqlResult { query, params })
            .select_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(username).into())
    }

    pub async fn remove(&self, username: &str) -> ServiceResult<()> {
        sqlx::query_scalar::<_, String>("DELETE FROM users WHERE username = $1 RETURNING username")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(username))?;

        info!("Removed user {}", username);
        Ok(())
    }

    /// Record an application. Applying twice is a no-op.
    pub async fn apply_to_job(&self, username: &str, job_id: i32) -> ServiceResult<()> {
        if !self.exists(username).await? {
            return Err(not_found(username).into());
        }
        let job = sqlx::query_scalar::<_, i32>("SELECT id FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job.is_none() {
            return Err(job::not_found(job_id).into());
        }

        sqlx::query(
            "INSERT INTO applications (username, job_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(username)
        .bind(job_id)
        .execute(&self.pool)
        .await?;

        info!("User {} applied to job {}", username, job_id);
        Ok(())
    }

    pub(crate) async fn exists(&self, username: &str) -> Result<bool, DatabaseError> {
        let found = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

pub(crate) fn not_found(username: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("No user: {}", username))
}
