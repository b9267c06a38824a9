use lambda_http::http::header::{ALLOW, CONTENT_TYPE};
use lambda_http::http::{Method, StatusCode};
use lambda_http::tracing::{error, info, warn};
use lambda_http::{Body, Error, Request, Response};

use crate::greeter::greet_body;
use crate::models::GreetingError;
use crate::models::error::ErrorResponse;

/// Marker logged once for every request the HTTP trigger accepts.
pub const REQUEST_RECEIVED: &str = "HTTP trigger function processed a request.";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// Lambda HTTP handler. Accepts a POST whose body is a greeting request and
/// answers with the greeting as plain text.
///
/// Status codes:
///
/// - `200`: greeting rendered
/// - `400`: body is not a JSON object (`InvalidBody`) or a field has the
///   wrong type (`InvalidField`)
/// - `405`: method other than POST (`MethodNotAllowed`, with `Allow: POST`)
///
/// Error bodies are `{"errorType", "errorMessage"}`.
///
/// # Errors
///
/// Only fails if the response itself cannot be built; request problems are
/// answered with a status code instead.
pub async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method() != Method::POST {
        let e = GreetingError::MethodNotAllowed(event.method().to_string());
        warn!(error = %e, "Rejecting non-POST request");
        return error_response(&e);
    }

    info!("{REQUEST_RECEIVED}");

    let body: &[u8] = event.body();

    match greet_body(body) {
        Ok(greeting) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, TEXT_PLAIN)
            .body(Body::from(greeting.message))?),
        Err(e) => {
            error!(error = %e, error_type = e.error_type(), "Failed to parse request");
            error_response(&e)
        }
    }
}

fn error_response(e: &GreetingError) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(&ErrorResponse::from(e))?;
    let mut builder = Response::builder()
        .status(e.status_code())
        .header(CONTENT_TYPE, APPLICATION_JSON);

    if matches!(e, GreetingError::MethodNotAllowed(_)) {
        builder = builder.header(ALLOW, Method::POST.as_str());
    }

    Ok(builder.body(Body::from(payload))?)
}
