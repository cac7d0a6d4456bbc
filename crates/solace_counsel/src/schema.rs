//! Response-schema descriptors for constrained model output.

use crate::model::ModelError;
use serde_json::{json, Value};

/// A JSON-schema-shaped descriptor of the structure the model must answer
/// with. Built per call site with `serde_json::json!`; the `required` list
/// is also what [`check_required`](Self::check_required) validates after a
/// nominally successful call.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    pub schema_type: String,
    pub properties: Value,
    pub required: Vec<String>,
}

impl ResponseSchema {
    /// An object schema with the given properties, all fields in
    /// `required` mandatory.
    pub fn object(properties: Value, required: &[&str]) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties,
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The schema as the JSON value providers put on the wire.
    pub fn to_value(&self) -> Value {
        json!({
            "type": self.schema_type,
            "properties": self.properties,
            "required": self.required,
        })
    }

    /// Check that every required field is present and non-null in a parsed
    /// response. Permissive schemas make this worth doing explicitly even
    /// when the call succeeded.
    pub fn check_required(&self, value: &Value) -> Result<(), ModelError> {
        let missing: Vec<&str> = self
            .required
            .iter()
            .filter(|field| {
                value
                    .get(field.as_str())
                    .map_or(true, |v| v.is_null())
            })
            .map(|s| s.as_str())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ModelError::SchemaViolation(format!(
                "response missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}
