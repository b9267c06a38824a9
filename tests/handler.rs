// HTTP handler tests
#![allow(clippy::unwrap_used)]

use greeting_function::handler::function_handler;
use lambda_http::http::header::{ALLOW, CONTENT_TYPE};
use lambda_http::http::{self, Method, StatusCode};
use lambda_http::{Body, Request, Response};
use serde_json::{Value, json};
use tracing_test::traced_test;

#[tokio::test]
async fn test_greeting_with_name_and_age() {
    let response = post(json!({"name": "Alice", "age": 30}).to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, Alice. You are 30 years old.");
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn test_greeting_matches_template_for_any_values() {
    let cases = [("Zoë", 0), ("O'Brien", 101), ("  spaced  ", -1), ("", 2_147_483_647)];

    for (name, age) in cases {
        let response = post(json!({"name": name, "age": age}).to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(&response),
            format!("Hello, {name}. You are {age} years old.")
        );
    }
}

#[tokio::test]
async fn test_empty_object_uses_defaults() {
    let response = post("{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, . You are 0 years old.");
}

#[tokio::test]
async fn test_age_omitted() {
    let response = post(r#"{"name": "Bob"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, Bob. You are 0 years old.");
}

#[tokio::test]
async fn test_name_omitted() {
    let response = post(r#"{"age": 7}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, . You are 7 years old.");
}

#[tokio::test]
async fn test_unexpected_fields_ignored() {
    let response = post(r#"{"name": "Carol", "age": 52, "role": "admin", "tags": [1, 2]}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, Carol. You are 52 years old.");
}

#[tokio::test]
async fn test_empty_body_uses_defaults() {
    let response = post("").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, . You are 0 years old.");
}

#[tokio::test]
async fn test_non_json_body_is_bad_request() {
    let response = post("not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");

    let error = body_json(&response);
    assert_eq!(error["errorType"], "InvalidBody");
    assert!(error["errorMessage"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_json_array_body_is_bad_request() {
    let response = post(r#"["Alice", 30]"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["errorType"], "InvalidBody");
}

#[tokio::test]
async fn test_age_as_text_is_bad_request() {
    let response = post(r#"{"name": "Alice", "age": "thirty"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(&response);
    assert_eq!(error["errorType"], "InvalidField");
    assert!(error["errorMessage"].as_str().unwrap().contains("`age`"));
}

#[tokio::test]
async fn test_name_as_object_is_bad_request() {
    let response = post(r#"{"name": {"first": "Alice"}}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["errorType"], "InvalidField");
}

#[tokio::test]
async fn test_binary_body_is_decoded() {
    let request = http::Request::builder()
        .method(Method::POST)
        .uri("/api/greeting")
        .body(Body::from(br#"{"name": "Dana", "age": 19}"#.to_vec()))
        .unwrap();

    let response = function_handler(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, Dana. You are 19 years old.");
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let request = http::Request::builder()
        .method(Method::GET)
        .uri("/api/greeting")
        .body(Body::Empty)
        .unwrap();

    let response = function_handler(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers().get(ALLOW).unwrap(), "POST");
    assert_eq!(body_json(&response)["errorType"], "MethodNotAllowed");
}

#[tokio::test]
async fn test_leading_bom_accepted() {
    let response = post("\u{feff}{\"name\": \"Al\", \"age\": 2}").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(&response), "Hello, Al. You are 2 years old.");
}

#[tokio::test]
#[traced_test]
async fn test_logs_marker_and_fields_for_greeting() {
    let response = post(r#"{"name": "Alice", "age": 30}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(logs_contain("HTTP trigger function processed a request."));
    assert!(logs_contain("Received name: Alice and age: 30."));
}

#[tokio::test]
#[traced_test]
async fn test_logs_only_marker_for_rejected_body() {
    let response = post("not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(logs_contain("HTTP trigger function processed a request."));
    assert!(!logs_contain("Received name:"));
}

/// Helper function to send a POST through the handler
async fn post(body: impl Into<String>) -> Response<Body> {
    let request: Request = http::Request::builder()
        .method(Method::POST)
        .uri("/api/greeting")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    function_handler(request).await.unwrap()
}

fn body_text(response: &Response<Body>) -> String {
    String::from_utf8(response.body().to_vec()).unwrap()
}

fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_slice(response.body()).unwrap()
}
