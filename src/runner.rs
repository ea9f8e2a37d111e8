use crate::config::Config;
use crate::corpus::{LanguageCatalog, SourceCorpus};
use crate::gemini::GeminiClient;
use crate::translator::{translate, TranslateError};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Settings for one sweep over the catalog
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output_dir: PathBuf,
    /// Pause between successive translation calls
    pub request_delay: Duration,
    /// Codes equal to or prefixed by this are never translated
    pub source_language_code: String,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            request_delay: config.request_delay,
            source_language_code: config.source_language_code.clone(),
        }
    }
}

/// Which stage a language failed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Extraction,
    Service,
    Write,
}

impl From<&TranslateError> for FailureKind {
    fn from(error: &TranslateError) -> Self {
        match error {
            TranslateError::Extraction { .. } => FailureKind::Extraction,
            TranslateError::Service(_) => FailureKind::Service,
            TranslateError::Write { .. } => FailureKind::Write,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLanguage {
    pub name: String,
    pub code: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of a full sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files written, in catalog order
    pub written: Vec<PathBuf>,
    /// Source-language codes that were skipped
    pub skipped: Vec<String>,
    pub failed: Vec<FailedLanguage>,
}

impl RunReport {
    /// Number of generation calls made
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Translate the corpus into every non-source language in the catalog.
///
/// Languages are handled one at a time in catalog order, with one attempt
/// each. A failure is logged and recorded; it never stops the sweep.
pub async fn run(
    client: &GeminiClient,
    settings: &RunSettings,
    corpus: &SourceCorpus,
    catalog: &LanguageCatalog,
) -> RunReport {
    let mut report = RunReport::default();

    for language in catalog.iter() {
        if language.is_source_language(&settings.source_language_code) {
            debug!("Skipping source language {} ({})", language.name, language.code);
            report.skipped.push(language.code.clone());
            continue;
        }

        if report.attempted() > 0 && !settings.request_delay.is_zero() {
            sleep(settings.request_delay).await;
        }

        match translate(client, &settings.output_dir, language, corpus).await {
            Ok(path) => report.written.push(path),
            Err(e) => {
                let kind = FailureKind::from(&e);
                if kind == FailureKind::Extraction {
                    warn!("✘ {} ({}) skipped: {}", language.name, language.code, e);
                } else {
                    error!("✘ Failed for {} ({}): {}", language.name, language.code, e);
                }
                report.failed.push(FailedLanguage {
                    name: language.name.clone(),
                    code: language.code.clone(),
                    kind,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Finished: {} written, {} failed, {} skipped",
        report.written.len(),
        report.failed.len(),
        report.skipped.len()
    );
    if !report.failed.is_empty() {
        let codes: Vec<&str> = report.failed.iter().map(|f| f.code.as_str()).collect();
        warn!("Re-run to retry failed languages: {}", codes.join(", "));
    }

    report
}
