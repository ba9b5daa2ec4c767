use super::types::SqlParam;

/// Accumulates `WHERE` conditions together with their bound parameters.
///
/// Placeholders are numbered in the order conditions are added, so the
/// emitted clause and the parameter list can never drift apart.
#[derive(Debug, Default)]
pub struct WhereBuilder {
    conditions: Vec<String>,
    param_values: Vec<SqlParam>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `<column> <op> $n` and binds `value` to `$n`.
    pub fn compare(&mut self, column: &str, op: &str, value: impl Into<SqlParam>) -> &mut Self {
        let placeholder = self.param(value.into());
        self.conditions.push(format!("{} {} {}", column, op, placeholder));
        self
    }

    /// Case-insensitive substring match. `%` and `_` in the needle match
    /// themselves, via the default `\` LIKE escape.
    pub fn contains(&mut self, column: &str, needle: &str) -> &mut Self {
        let mut pattern = String::with_capacity(needle.len() + 2);
        pattern.push('%');
        for c in needle.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        self.compare(column, "ILIKE", pattern)
    }

    /// Adds a condition that binds nothing.
    pub fn raw(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// `WHERE a AND b ...`, or an empty string when no condition was added.
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn into_params(self) -> Vec<SqlParam> {
        self.param_values
    }

    fn param(&mut self, value: SqlParam) -> String {
        self.param_values.push(value);
        format!("${}", self.param_values.len())
    }
}
