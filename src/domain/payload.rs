//! Raw payload inspection shared by the entity validators.
//!
//! Payloads arrive as loosely-typed JSON. A required field counts as missing
//! when it is absent or falsy (`null`, `false`, `0`, `""`), and every declared
//! field must be a JSON string. Checks run in that order.

use serde_json::{Map, Value};

use super::errors::InvariantError;

/// Read-only view over a raw associative payload.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    /// Wrap a raw value. Anything other than a JSON object behaves as an empty payload.
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// Whether the field is present and truthy.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Extract `keys` as strings, failing with `missing` if any field is absent
    /// or falsy, then with `mistyped` if any field is not a string.
    pub fn strings<const N: usize>(
        &self,
        keys: [&str; N],
        missing: InvariantError,
        mistyped: InvariantError,
    ) -> Result<[String; N], InvariantError> {
        if !keys.iter().all(|key| self.is_present(key)) {
            return Err(missing);
        }

        if !keys
            .iter()
            .all(|key| self.get(key).is_some_and(Value::is_string))
        {
            return Err(mistyped);
        }

        Ok(keys.map(|key| {
            self.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        }))
    }
}

/// JSON truthiness: `null`, `false`, zero and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
