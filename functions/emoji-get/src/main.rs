use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use emojilayer::emoji_for_mood;
use eventslayer::{json_response, path_param};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::json;
use tracing::info;

/// GET /emoji/{mood} - look up the emoji for a mood.
///
/// Unknown moods are not errors; the registry's fallback glyph keeps the
/// lookup total, so this handler always answers 200.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let mood = path_param(&event.payload, "mood", "neutral");
    let emoji = emoji_for_mood(&mood);

    info!(%mood, %emoji, "resolved mood");

    Ok(json_response(200, &json!({ "mood": mood, "emoji": emoji })))
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
    use serde_json::Value;

    fn request(mood: Option<&str>) -> LambdaEvent<ApiGatewayProxyRequest> {
        let mut event = ApiGatewayProxyRequest::default();
        if let Some(mood) = mood {
            event
                .path_parameters
                .insert("mood".to_string(), mood.to_string());
        }
        LambdaEvent::new(event, Context::default())
    }

    fn body_json(response: &ApiGatewayProxyResponse) -> Value {
        match response.body.as_ref() {
            Some(Body::Text(text)) => serde_json::from_str(text).unwrap(),
            other => panic!("expected text body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn returns_the_mapped_emoji() {
        let response = handler(request(Some("Happy"))).await.unwrap();
        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["mood"], "Happy");
        assert_eq!(body["emoji"], "😄");
    }

    #[tokio::test]
    async fn missing_path_parameter_defaults_to_neutral() {
        let response = handler(request(None)).await.unwrap();
        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["mood"], "neutral");
        assert_eq!(body["emoji"], "😐");
    }

    #[tokio::test]
    async fn unknown_mood_gets_the_fallback_glyph() {
        let response = handler(request(Some("not-a-real-mood"))).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(body_json(&response)["emoji"], emojilayer::FALLBACK_EMOJI);
    }
}
