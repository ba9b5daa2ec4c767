use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("No data")]
    NoData,

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("{0} must be a boolean")]
    NotABoolean(&'static str),

    #[error("{min} value cannot exceed {max} value")]
    InvertedRange { min: &'static str, max: &'static str },
}
