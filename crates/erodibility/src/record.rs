use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::RescaleError;

pub const ERODIBILITY_FIELD: &str = "erodibility";

/// A single JSON object of the dataset. Unknown fields are kept as-is and in
/// their original order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `Ok(None)` when the field is absent. `index` is only used to locate
    /// the record in the error.
    pub fn erodibility(&self, index: usize) -> Result<Option<f64>, RescaleError> {
        let Some(value) = self.0.get(ERODIBILITY_FIELD) else {
            return Ok(None);
        };

        match value.as_f64() {
            Some(number) => Ok(Some(number)),
            None => Err(RescaleError::NotNumeric {
                index,
                field: ERODIBILITY_FIELD,
                found: json_type_name(value),
            }),
        }
    }

    /// Overwrites the field in place, keeping its position when it already exists.
    pub fn set_erodibility(&mut self, index: usize, value: f64) -> Result<(), RescaleError> {
        let number =
            Number::from_f64(value).ok_or(RescaleError::NonFiniteResult { index, value })?;
        self.0.insert(ERODIBILITY_FIELD.to_string(), Value::Number(number));
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        // numbers beyond the f64 range, kept verbatim by arbitrary_precision
        Value::Number(_) => "a number outside the f64 range",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
