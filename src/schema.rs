//! JSON Schema for the greeting request and response documents.

use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

use crate::models::{GreetingRequest, GreetingResponse};

const DESCRIPTION: &str = "Greets a person by name and age. Accepts a JSON object with optional `name` (string) and `age` (integer) fields and returns `Hello, {name}. You are {age} years old.`";

/// Builds the schema document describing the greeting function.
///
/// # Errors
///
/// Returns an error if a generated schema cannot be converted to JSON.
pub fn greeting_schema() -> Result<Value, serde_json::Error> {
    Ok(json!({
        "name": "greeting",
        "description": DESCRIPTION,
        "inputSchema": document_schema::<GreetingRequest>()?,
        "outputSchema": document_schema::<GreetingResponse>()?,
    }))
}

// Drops the metadata keys consumers of the document do not need
fn document_schema<T: JsonSchema>() -> Result<Value, serde_json::Error> {
    let mut schema = serde_json::to_value(schema_for!(T))?;

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }

    Ok(schema)
}
