pub mod auth;
pub mod response;

pub use auth::{authenticate, authorize, enforce, Access, AuthUser, Principal};
pub use response::{ApiResponse, ApiResult};
