use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::tracing::{error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;

use crate::greeter::{greet, greet_body};
use crate::models::{GreetingError, GreetingRequest, GreetingResponse};

/// Marker logged once for every direct invocation.
pub const REQUEST_RECEIVED: &str = "Direct invocation processed a request.";

/// The parts of an API Gateway (REST or HTTP API) or function URL proxy
/// event the greeting needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyEvent {
    http_method: Option<String>,
    request_context: ProxyRequestContext,
    body: Option<String>,
    #[serde(default)]
    is_base64_encoded: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequestContext {
    http_method: Option<String>,
    // payload format 2.0 moves the method under `requestContext.http`
    http: Option<ProxyHttp>,
}

#[derive(Debug, Deserialize)]
struct ProxyHttp {
    method: Option<String>,
}

impl ProxyEvent {
    fn method(&self) -> Option<&str> {
        self.http_method
            .as_deref()
            .or(self.request_context.http_method.as_deref())
            .or_else(|| {
                self.request_context
                    .http
                    .as_ref()
                    .and_then(|http| http.method.as_deref())
            })
    }

    fn body_bytes(&self) -> Result<Vec<u8>, GreetingError> {
        let body = self.body.as_deref().unwrap_or_default();

        if self.is_base64_encoded {
            STANDARD
                .decode(body)
                .map_err(|e| GreetingError::InvalidBody(format!("body is not valid base64: {e}")))
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }
}

/// Lambda handler for direct invocation.
///
/// The payload is either the greeting request itself or a proxy event
/// (recognised by its `requestContext` object) carrying the request in
/// `body`. A proxy event must use POST; a base64 body is decoded first.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidBody`: the request document is not a JSON object, or the proxy
///   event or its base64 body is malformed
/// - `InvalidField`: `name` or `age` has the wrong type
/// - `MethodNotAllowed`: a proxy event with a method other than POST
pub async fn invoke_handler(event: LambdaEvent<Value>) -> Result<GreetingResponse, Diagnostic> {
    let (payload, _context) = event.into_parts();

    info!("{REQUEST_RECEIVED}");

    greet_payload(payload).map_err(|e| {
        error!(error = %e, error_type = e.error_type(), "Failed to parse request");
        Diagnostic::from(e)
    })
}

fn greet_payload(payload: Value) -> Result<GreetingResponse, GreetingError> {
    let is_proxy_event = payload.get("requestContext").is_some_and(Value::is_object);

    if !is_proxy_event {
        return GreetingRequest::from_value(payload).map(|request| greet(&request));
    }

    let event: ProxyEvent = serde_json::from_value(payload)
        .map_err(|e| GreetingError::InvalidBody(format!("malformed proxy event: {e}")))?;

    if let Some(method) = event.method()
        && !method.eq_ignore_ascii_case("POST")
    {
        return Err(GreetingError::MethodNotAllowed(method.to_string()));
    }

    greet_body(&event.body_bytes()?)
}
