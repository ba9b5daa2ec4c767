pub mod company;
pub mod job;
pub mod technology;
pub mod user;

pub use company::CompanyService;
pub use job::JobService;
pub use technology::TechnologyService;
pub use user::UserService;

use crate::auth::password::PasswordError;
use crate::database::DatabaseError;
use crate::filter::FilterError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("Invalid username/password")]
    InvalidCredentials,
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Database(DatabaseError::from(err))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
