use crate::error::RecordError;
use crate::value::{Filterable, Value};
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// A record backed by a JSON object, the common shape rows arrive in from a
/// deserialized API payload. Field values must be scalar or null; nesting is
/// rejected at construction so the filter core never sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(Map<String, serde_json::Value>);

impl JsonRecord {
    pub fn fields(&self) -> &Map<String, serde_json::Value> { &self.0 }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<serde_json::Value> for JsonRecord {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => {
                for (field, value) in &map {
                    if value.is_array() || value.is_object() {
                        return Err(RecordError::NonScalarField {
                            field: field.clone(),
                            kind: json_kind(value),
                        });
                    }
                }
                Ok(JsonRecord(map))
            }
            other => Err(RecordError::NotAnObject(json_kind(&other))),
        }
    }
}

/// Reshape a JSON array of objects into records, failing fast on the first
/// shape violation instead of silently coercing.
pub fn records_from_json(value: serde_json::Value) -> Result<Vec<JsonRecord>, RecordError> {
    match value {
        serde_json::Value::Array(items) => items.into_iter().map(JsonRecord::try_from).collect(),
        other => Err(RecordError::NotAnArray(json_kind(&other))),
    }
}

impl Filterable for JsonRecord {
    fn value(&self, field: &str) -> Option<Value> {
        match self.0.get(field)? {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Value::Boolean(*b)),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            // ruled out by construction
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{normalize, EMPTY_SENTINEL};
    use serde_json::json;

    #[test]
    fn object_becomes_record() {
        let record = JsonRecord::try_from(json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(record.value("name"), Some(Value::String("Alice".to_string())));
        assert_eq!(record.value("age"), Some(Value::Integer(30)));
    }

    #[test]
    fn null_and_missing_fields_normalize_to_sentinel() {
        let record = JsonRecord::try_from(json!({"department": null})).unwrap();
        assert_eq!(record.value("department"), None);
        assert_eq!(normalize(record.value("department")), EMPTY_SENTINEL);
        assert_eq!(normalize(record.value("no_such_field")), EMPTY_SENTINEL);
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            JsonRecord::try_from(json!("just a string")),
            Err(RecordError::NotAnObject("string"))
        );
    }

    #[test]
    fn nested_field_is_rejected() {
        assert_eq!(
            JsonRecord::try_from(json!({"tags": ["a", "b"]})),
            Err(RecordError::NonScalarField { field: "tags".to_string(), kind: "array" })
        );
    }

    #[test]
    fn array_of_objects_becomes_records() {
        let records = records_from_json(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value("id"), Some(Value::Integer(2)));

        assert_eq!(
            records_from_json(json!({"id": 1})),
            Err(RecordError::NotAnArray("object"))
        );
    }
}
