use greeting_function::handler::function_handler;
use lambda_http::{Error, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_http::tracing::init_default_subscriber();

    lambda_http::run(service_fn(function_handler)).await
}
