use anyhow::Result;
use corpus_translator::{
    config::Config,
    corpus::{default_catalog, default_corpus, SourceCorpus},
    gemini::GeminiClient,
    runner::{run, RunSettings},
};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the shell)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("corpus_translator=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let corpus = match &config.corpus_file {
        Some(path) => SourceCorpus::load(path)?,
        None => default_corpus(),
    };
    let catalog = default_catalog();

    info!(
        "Translating {} strings into {} catalog languages with {}",
        corpus.len(),
        catalog.len(),
        config.gemini_model
    );

    let client = GeminiClient::from_config(reqwest::Client::new(), &config);
    let settings = RunSettings::from_config(&config);

    // Per-language failures are reported, not fatal
    run(&client, &settings, &corpus, &catalog).await;

    Ok(())
}
