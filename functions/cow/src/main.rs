use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use eventslayer::{path_param, text_response};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::info;

const MAX_BUBBLE_WIDTH: usize = 40;

const COW: &str = r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
";

// Greedy word wrap. A single word longer than `width` gets its own
// over-wide line rather than being split mid-word.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

fn cowsay(text: &str) -> String {
    let lines = wrap_text(text, MAX_BUBBLE_WIDTH);
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!(" {}\n", "_".repeat(width + 2));
    if let [line] = lines.as_slice() {
        out.push_str(&format!("< {line} >\n"));
    } else {
        let last = lines.len() - 1;
        for (index, line) in lines.iter().enumerate() {
            let (open, close) = match index {
                0 => ('/', '\\'),
                index if index == last => ('\\', '/'),
                _ => ('|', '|'),
            };
            out.push_str(&format!("{open} {line:<width$} {close}\n"));
        }
    }
    out.push_str(&format!(" {}\n", "-".repeat(width + 2)));
    out.push_str(COW);
    out
}

/// GET /cow/{text} - wrap the text in a cowsay speech bubble.
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let text = path_param(&event.payload, "text", "Hello World!");
    info!(%text, "rendering cow");
    Ok(text_response(200, cowsay(&text)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    lambda_runtime::run(service_fn(handler)).await
}
