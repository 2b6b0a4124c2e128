use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use eventslayer::{bad_request, json_response, parse_body, path_param};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

/// POST /hello/{user} - greet the user with a caller-supplied message.
///
/// The body is optional; a missing or message-less body falls back to a
/// plain "Hello". Only a malformed body is rejected.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let user = path_param(&event.payload, "user", "Anonymous");

    let body: Value = match parse_body(&event.payload) {
        Ok(body) => body,
        Err(err) => return Ok(bad_request(err.to_string())),
    };
    let message = body.get("message").and_then(Value::as_str).unwrap_or("Hello");

    let greeting = format!("{message}, {user}! Thanks for posting.");
    Ok(json_response(
        201,
        &json!({ "user": user, "greeting": greeting, "method": "POST" }),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    lambda_runtime::run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::encodings::Body;
    use lambda_runtime::Context;

    fn request(user: Option<&str>, body: Option<&str>) -> LambdaEvent<ApiGatewayProxyRequest> {
        let mut event = ApiGatewayProxyRequest::default();
        if let Some(user) = user {
            event
                .path_parameters
                .insert("user".to_string(), user.to_string());
        }
        event.body = body.map(str::to_string);
        LambdaEvent::new(event, Context::default())
    }

    fn body_json(response: &ApiGatewayProxyResponse) -> Value {
        match response.body.as_ref() {
            Some(Body::Text(text)) => serde_json::from_str(text).unwrap(),
            other => panic!("expected text body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn uses_the_posted_message() {
        let response = handler(request(Some("Dana"), Some(r#"{"message": "Howdy"}"#)))
            .await
            .unwrap();
        assert_eq!(response.status_code, 201);
        let body = body_json(&response);
        assert_eq!(body["user"], "Dana");
        assert_eq!(body["greeting"], "Howdy, Dana! Thanks for posting.");
        assert_eq!(body["method"], "POST");
    }

    #[tokio::test]
    async fn absent_body_falls_back_to_hello() {
        let response = handler(request(Some("Dana"), None)).await.unwrap();
        assert_eq!(response.status_code, 201);
        assert_eq!(
            body_json(&response)["greeting"],
            "Hello, Dana! Thanks for posting."
        );
    }

    #[tokio::test]
    async fn missing_message_field_falls_back_to_hello() {
        let response = handler(request(Some("Dana"), Some("{}"))).await.unwrap();
        assert_eq!(
            body_json(&response)["greeting"],
            "Hello, Dana! Thanks for posting."
        );
    }

    #[tokio::test]
    async fn malformed_body_is_a_client_error() {
        let response = handler(request(Some("Dana"), Some("not json"))).await.unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(body_json(&response)["error"], "Invalid JSON in request body");
    }

    #[tokio::test]
    async fn missing_user_defaults_to_anonymous() {
        let response = handler(request(None, None)).await.unwrap();
        assert_eq!(body_json(&response)["user"], "Anonymous");
    }
}
