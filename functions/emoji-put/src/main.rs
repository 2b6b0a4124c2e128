use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use emojilayer::emoji_for_mood;
use eventslayer::{bad_request, json_response, parse_body, path_param, BodyError};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};
use tracing::info;

/// PUT /emoji/{mood} - set a custom emoji for a mood.
///
/// The registry is a fixed compile-time table, so the change is reported
/// back to the caller but never stored; each invocation sees the original
/// mapping.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let mood = path_param(&event.payload, "mood", "neutral");

    let body: Value = match parse_body(&event.payload) {
        Ok(body) => body,
        Err(err) => return Ok(bad_request(err.to_string())),
    };

    let updated = match body.get("emoji").and_then(Value::as_str) {
        Some(emoji) if !emoji.is_empty() => emoji,
        _ => return Ok(bad_request(BodyError::MissingField("emoji").to_string())),
    };

    let previous = emoji_for_mood(&mood);
    info!(%mood, %previous, %updated, "reporting emoji update");

    Ok(json_response(
        200,
        &json!({
            "mood": mood,
            "previous_emoji": previous,
            "updated_emoji": updated,
            "message": format!("Emoji for '{mood}' updated from {previous} to {updated}"),
            "method": "PUT",
        }),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    lambda_runtime::run(service_fn(handler)).await
}
