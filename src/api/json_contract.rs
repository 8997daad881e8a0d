use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ChartDescription};

impl ChartConfig {
    /// Parses a host config payload.
    ///
    /// Only a top-level non-object is an error. Inside the object, missing or
    /// wrong-shaped fields are treated as absent.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        if !value.is_object() {
            return Err(ChartError::InvalidConfig(format!(
                "config must be a json object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to read config object: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }
}

impl ChartDescription {
    /// Mapped output as JSON, for adapters that cross a process or FFI boundary.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Renderer(format!("failed to serialize chart description: {e}"))
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
