pub mod company;
pub mod error;
pub mod filter_where;
pub mod job;
pub mod partial_update;
pub mod types;

pub use company::CompanyFilter;
pub use error::FilterError;
pub use filter_where::WhereBuilder;
pub use job::JobFilter;
pub use partial_update::{Changeset, ColumnMap, PartialUpdate};
pub use types::{SqlParam, SqlResult, SqlType, TypedParam};
