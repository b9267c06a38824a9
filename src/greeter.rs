use lambda_runtime::tracing::{debug, info};

use crate::models::{GreetingError, GreetingRequest, GreetingResponse};

/// Renders the greeting for a decoded request.
///
/// Missing fields render as their defaults:
///
/// `{"name": "Alice", "age": 30}` → "Hello, Alice. You are 30 years old."
/// `{}` → "Hello, . You are 0 years old."
#[must_use]
pub fn greet(request: &GreetingRequest) -> GreetingResponse {
    let name = request.name();
    let age = request.age();

    info!("Received name: {name} and age: {age}.");

    GreetingResponse {
        message: format!("Hello, {name}. You are {age} years old."),
    }
}

/// Decodes a raw body and renders the greeting.
///
/// # Errors
///
/// Returns `InvalidBody` or `InvalidField` when the body cannot be decoded.
pub fn greet_body(body: &[u8]) -> Result<GreetingResponse, GreetingError> {
    debug!(body_size = body.len(), "Decoding request body");
    let request = GreetingRequest::from_slice(body)?;
    debug!(?request, "Decoded request");
    Ok(greet(&request))
}
