use std::num::ParseFloatError;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use eventslayer::{bad_request, json_response};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::json;
use tracing::info;

// Missing path parameters count as zero, matching the other handlers'
// lenient treatment of absent parameters.
fn numeric_param(event: &ApiGatewayProxyRequest, name: &str) -> Result<f64, ParseFloatError> {
    match event.path_parameters.get(name) {
        Some(raw) => raw.parse(),
        None => Ok(0.0),
    }
}

/// GET /add/{a}/{b} - add two numbers from path parameters.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let (a, b) = match (
        numeric_param(&event.payload, "a"),
        numeric_param(&event.payload, "b"),
    ) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            return Ok(bad_request(format!("Invalid numbers provided: {err}")))
        }
    };

    let result = a + b;
    info!(a, b, result, "computed sum");

    Ok(json_response(200, &json!({ "a": a, "b": b, "result": result })))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    lambda_runtime::run(service_fn(handler)).await
}
