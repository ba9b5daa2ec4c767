use serde::{Deserialize, Deserializer};

pub mod company;
pub mod job;
pub mod technology;
pub mod user;

pub use company::{Company, CompanyDetail, CompanyNew, CompanyUpdate};
pub use job::{Job, JobNew, JobUpdate};
pub use technology::{Technology, TechnologyNew};
pub use user::{User, UserAuth, UserCredentials, UserDetail, UserNew, UserRegister, UserUpdate};

/// Tells an explicit `null` apart from an absent field. Use with
/// `#[serde(default)]`: absent is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
