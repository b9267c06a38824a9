use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::GreetingError;

/// Request for a greeting
///
/// Both fields are optional. Decoding goes field by field through
/// [`GreetingRequest::from_slice`] / [`GreetingRequest::from_value`] so an
/// absent field and a mistyped field are told apart; the `serde` attributes
/// only shape the generated schema.
#[derive(Debug, Default, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "snake_case")]
pub struct GreetingRequest {
    #[schemars(description = "Name to greet; rendered as empty when absent")]
    pub name: Option<String>,
    #[schemars(description = "Age in years; rendered as 0 when absent")]
    pub age: Option<i32>,
}

/// Response containing the rendered greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GreetingResponse {
    #[schemars(description = "Greeting of the form `Hello, {name}. You are {age} years old.`")]
    pub message: String,
}

impl GreetingRequest {
    /// Decodes a raw request body.
    ///
    /// A leading UTF-8 byte-order mark is skipped. An empty or
    /// whitespace-only body decodes as an empty request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBody` if the body is not a JSON object and
    /// `InvalidField` if `name` or `age` has the wrong type.
    pub fn from_slice(body: &[u8]) -> Result<Self, GreetingError> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let document: Value = serde_json::from_slice(body)
            .map_err(|e| GreetingError::InvalidBody(e.to_string()))?;

        Self::from_value(document)
    }

    /// Decodes an already-parsed JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`GreetingRequest::from_slice`].
    pub fn from_value(document: Value) -> Result<Self, GreetingError> {
        match document {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self {
                name: field(&fields, "name")?,
                age: field(&fields, "age")?,
            }),
            other => Err(GreetingError::InvalidBody(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Name to render, empty when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Age to render, 0 when absent.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age.unwrap_or_default()
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// Absent and `null` both yield `None`; anything else must decode as `T`.
fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, GreetingError> {
    fields.get(key).map_or(Ok(None), |value| {
        Option::<T>::deserialize(value).map_err(|e| GreetingError::InvalidField {
            field: key,
            reason: e.to_string(),
        })
    })
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
