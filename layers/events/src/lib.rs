//! Request/response plumbing shared by every function in this workspace.
//!
//! Handlers consume API Gateway proxy events and answer with proxy
//! responses. The helpers here cover the two things every handler needs —
//! pulling a path parameter with a default and parsing an optional JSON
//! body — plus response builders so bodies are always produced by proper
//! serialization instead of string interpolation.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::http::header::CONTENT_TYPE;
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Client-input failures when reading a request body. The `Display` strings
/// are the exact messages surfaced in 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("Invalid JSON in request body")]
    InvalidJson,
    #[error("Missing '{0}' field in request body")]
    MissingField(&'static str),
}

/// Returns the named path parameter, or `default` when the parameter is
/// absent. Absence is never an error for these handlers.
pub fn path_param(event: &ApiGatewayProxyRequest, name: &str, default: &str) -> String {
    event
        .path_parameters
        .get(name)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Parses the request body as JSON. An absent body deserializes to
/// `T::default()`; a present but malformed body is a client error.
pub fn parse_body<T>(event: &ApiGatewayProxyRequest) -> Result<T, BodyError>
where
    T: DeserializeOwned + Default,
{
    match event.body.as_deref() {
        None => Ok(T::default()),
        Some(raw) => serde_json::from_str(raw).map_err(|_| BodyError::InvalidJson),
    }
}

/// Builds an `application/json` response from an already-assembled value.
pub fn json_response(status_code: i64, payload: &Value) -> ApiGatewayProxyResponse {
    respond(status_code, "application/json", payload.to_string())
}

/// Builds a `text/plain` response.
pub fn text_response(status_code: i64, body: String) -> ApiGatewayProxyResponse {
    respond(status_code, "text/plain", body)
}

/// 400 response with the standard `{"error": ...}` shape.
pub fn bad_request(message: String) -> ApiGatewayProxyResponse {
    json_response(400, &json!({ "error": message }))
}

fn respond(status_code: i64, content_type: &'static str, body: String) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    ApiGatewayProxyResponse {
        status_code,
        headers,
        multi_value_headers: Default::default(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    }
}
