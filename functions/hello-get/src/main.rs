use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use eventslayer::{json_response, path_param};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::json;

/// GET /hello/{user} - greet the user named in the path.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let user = path_param(&event.payload, "user", "Anonymous");
    Ok(json_response(
        200,
        &json!({ "message": format!("Hello, {user}!") }),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    lambda_runtime::run(service_fn(handler)).await
}
