use serde::{Deserialize, Serialize};

/// Sentinel that absent or null field values normalize to. It participates in
/// aggregation, filtering, and the URL codec identically, so a selection can
/// target "rows with no value here". A legitimate data value equal to the
/// sentinel would collide with it; that limitation is documented, not resolved.
pub const EMPTY_SENTINEL: &str = "(empty)";

/// A scalar field value as found in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Integer(i) }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Boolean(b) }
}

/// Trait for records whose fields are addressable by string key.
///
/// `None` means the field is absent or holds null; the distinction collapses
/// at this boundary and both normalize to [`EMPTY_SENTINEL`].
pub trait Filterable {
    fn value(&self, field: &str) -> Option<Value>;
}

/// Collapse an optional field value into its normalized string key, the form
/// used for grouping, selection membership, and the URL representation.
pub fn normalize(value: Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => EMPTY_SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scalars() {
        assert_eq!(normalize(Some(Value::from("Engineering"))), "Engineering");
        assert_eq!(normalize(Some(Value::from(42i64))), "42");
        assert_eq!(normalize(Some(Value::from(true))), "true");
        assert_eq!(normalize(Some(Value::from(2.5))), "2.5");
    }

    #[test]
    fn normalize_absent_to_sentinel() {
        assert_eq!(normalize(None), EMPTY_SENTINEL);
    }
}
