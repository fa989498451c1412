//! Ocular CLI - describe a local image via an OpenAI-compatible vision endpoint.
//!
//! Single-shot flow: read the image, encode it into a data URL, POST one
//! chat completion request, print the reply to stdout.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ocular::prelude::*;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Describe a local image using a multimodal chat completion API.
#[derive(Parser)]
#[command(name = "ocular")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the image file
    image: PathBuf,

    /// Prompt sent alongside the image
    #[arg(short, long, default_value = "What is in this image?")]
    prompt: String,

    /// Model to use
    #[arg(short = 'M', long, env = "OCULAR_MODEL")]
    model: Option<String>,

    /// API base URL
    #[arg(long, env = "OCULAR_BASE_URL")]
    base_url: Option<String>,

    /// API key for the endpoint
    #[arg(long, env = "OCULAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Image detail level (low, high, auto)
    #[arg(short, long)]
    detail: Option<String>,

    /// Maximum tokens in the reply
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
///
/// Logs go to stderr; stdout carries only the reply text.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ocular={level},ocular_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    let api_key = cli
        .api_key
        .ok_or_else(|| Error::config("no API key; pass --api-key or set OCULAR_API_KEY"))?;

    let mut config = ApiConfig::new(api_key);
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    let client = Client::new(config)?;

    let image = ImageFile::load(&cli.image).await?;
    tracing::debug!(
        path = %cli.image.display(),
        bytes = image.len(),
        mime = image.format().mime_type(),
        "loaded image"
    );

    let image_part = match cli.detail {
        Some(detail) => ContentPart::image_with_detail(&image, detail),
        None => ContentPart::image(&image),
    };
    let message = Message::new(
        Role::User,
        Content::Parts(vec![ContentPart::text(cli.prompt), image_part]),
    );

    let mut request = ChatRequest::new(client.model()).message(message);
    if let Some(max_tokens) = cli.max_tokens {
        request = request.max_tokens(max_tokens);
    }

    let response = client.chat(&request).await?;
    let content = response.text().ok_or_else(|| {
        Error::from(ApiError::response_format(
            "text content",
            "empty message content",
        ))
    })?;

    println!("{content}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ocular", "photo.jpg"]).expect("parse failed");
        assert_eq!(cli.image, PathBuf::from("photo.jpg"));
        assert_eq!(cli.prompt, "What is in this image?");
        assert!(cli.max_tokens.is_none());
    }
}
