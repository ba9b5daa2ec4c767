use super::error::FilterError;
use super::types::SqlParam;

/// Logical field name to physical column name. Fields without an entry are
/// used verbatim.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap(pub &'static [(&'static str, &'static str)]);

impl ColumnMap {
    pub const IDENTITY: ColumnMap = ColumnMap(&[]);

    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.0
            .iter()
            .find(|(logical, _)| *logical == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}

/// Insertion-ordered set of field changes for a partial update.
#[derive(Debug, Clone, Default)]
pub struct Changeset {
    fields: Vec<(&'static str, SqlParam)>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field`, replacing an earlier value for it in place.
    pub fn set(mut self, field: &'static str, value: impl Into<SqlParam>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    /// Sets `field` when a value is present. For nullable columns pass an
    /// `Option<Option<V>>`: `Some(None)` sets the column to `NULL`.
    pub fn set_opt<V: Into<SqlParam>>(self, field: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// `SET` assignments and their values. `clauses[i]` binds `values[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub clauses: Vec<String>,
    pub values: Vec<SqlParam>,
}

impl PartialUpdate {
    pub fn build(changes: Changeset, columns: ColumnMap) -> Result<Self, FilterError> {
        if changes.is_empty() {
            return Err(FilterError::NoData);
        }

        let mut clauses = Vec::with_capacity(changes.len());
        let mut values = Vec::with_capacity(changes.len());
        for (idx, (field, value)) in changes.fields.into_iter().enumerate() {
            clauses.push(format!("\"{}\"=${}", columns.resolve(field), idx + 1));
            values.push(value);
        }

        Ok(Self { clauses, values })
    }

    pub fn set_clause(&self) -> String {
        self.clauses.join(", ")
    }

    /// Placeholder index for the first parameter after the assignments,
    /// typically the row key in the `WHERE` clause.
    pub fn next_param(&self) -> usize {
        self.values.len() + 1
    }
}
