//! List the Gemini models available to the configured API key.
//!
//! Usage:
//!   cargo run --bin list-models
//!
//! Required environment variables:
//! - GEMINI_API_KEY
//!
//! Optional:
//! - GEMINI_API_URL (defaults to the public v1beta endpoint)

use anyhow::Result;
use corpus_translator::{config::Config, gemini::GeminiClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("corpus_translator=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let client = GeminiClient::from_config(reqwest::Client::new(), &config);

    println!("Available models:");
    for name in client.list_models().await? {
        println!("- {}", name);
    }

    Ok(())
}
