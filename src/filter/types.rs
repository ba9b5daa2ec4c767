use rust_decimal::Decimal;

/// A value bound to a positional `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Bool(bool),
    Int(i64),
    Text(String),
    Decimal(Decimal),
    /// `NULL`, typed so the placeholder's type can still be inferred.
    Null(SqlType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Bool,
    Int,
    Text,
    Decimal,
}

/// Values with a fixed column type, which lets `None` become a typed `NULL`.
pub trait TypedParam: Into<SqlParam> {
    const SQL_TYPE: SqlType;
}

impl TypedParam for bool {
    const SQL_TYPE: SqlType = SqlType::Bool;
}

impl TypedParam for i32 {
    const SQL_TYPE: SqlType = SqlType::Int;
}

impl TypedParam for i64 {
    const SQL_TYPE: SqlType = SqlType::Int;
}

impl TypedParam for String {
    const SQL_TYPE: SqlType = SqlType::Text;
}

impl TypedParam for Decimal {
    const SQL_TYPE: SqlType = SqlType::Decimal;
}

impl<V: TypedParam> From<Option<V>> for SqlParam {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => v.into(),
            None => SqlParam::Null(V::SQL_TYPE),
        }
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        SqlParam::Int(v as i64)
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<Decimal> for SqlParam {
    fn from(v: Decimal) -> Self {
        SqlParam::Decimal(v)
    }
}

/// Complete statement plus the parameters for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}
