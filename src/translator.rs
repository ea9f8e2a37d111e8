use crate::corpus::{LanguageEntry, SourceCorpus};
use crate::extract::{extract_json_object, ExtractError};
use crate::gemini::GeminiClient;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the file written inside each language directory
pub const OUTPUT_FILE_NAME: &str = "translation.json";

/// Why a single language could not be translated.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The model replied, but no JSON object could be taken from the reply.
    #[error("failed to parse JSON from response: {reason}")]
    Extraction {
        reason: ExtractError,
        raw_response: String,
    },

    /// The request itself failed (network, HTTP status, malformed body).
    #[error("generation request failed: {0:#}")]
    Service(anyhow::Error),

    /// The translation could not be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Keys that differ between the source corpus and a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    /// Source keys absent from the translation
    pub missing: Vec<String>,
    /// Translation keys absent from the source
    pub unexpected: Vec<String>,
}

impl KeyReport {
    pub fn compare(source: &SourceCorpus, translated: &Map<String, Value>) -> Self {
        Self {
            missing: source
                .keys()
                .filter(|k| !translated.contains_key(*k))
                .map(str::to_string)
                .collect(),
            unexpected: translated
                .keys()
                .filter(|k| !source.contains_key(k))
                .cloned()
                .collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Build the instruction sent to the model
pub fn build_translation_prompt(target_language: &str, json_block: &str) -> String {
    format!(
        r#"You are a professional translator.
Translate the given JSON object's *values* (not keys) into {}.
Return ONLY a valid JSON object with exactly the same keys.

JSON to translate:
{}
"#,
        target_language, json_block
    )
}

/// Path of the output file for a language code
pub fn output_path(output_dir: &Path, code: &str) -> PathBuf {
    output_dir.join(code).join(OUTPUT_FILE_NAME)
}

/// Write a translated object to `<output_dir>/<code>/translation.json`,
/// creating the directory if needed and replacing any previous file.
pub fn write_translation(
    output_dir: &Path,
    code: &str,
    translated: &Map<String, Value>,
) -> Result<PathBuf, TranslateError> {
    let dir = output_dir.join(code);
    std::fs::create_dir_all(&dir).map_err(|source| TranslateError::Write {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(OUTPUT_FILE_NAME);
    let write_error = |source: std::io::Error| TranslateError::Write {
        path: path.clone(),
        source,
    };

    let content = serde_json::to_string_pretty(translated)
        .map_err(|e| write_error(e.into()))?;

    // Stage next to the target and rename over it, so a failed write never
    // leaves a truncated translation behind
    let mut staged = NamedTempFile::new_in(&dir).map_err(write_error)?;
    #[cfg(unix)]
    {
        // Temp files are created owner-only; outputs are plain readable files
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }
    staged.write_all(content.as_bytes()).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged.persist(&path).map_err(|e| write_error(e.error))?;

    Ok(path)
}

/// Translate the corpus into one language and write the result.
///
/// Makes exactly one generation call. On any failure nothing is written, so
/// a translation from an earlier run stays in place.
pub async fn translate(
    client: &GeminiClient,
    output_dir: &Path,
    language: &LanguageEntry,
    corpus: &SourceCorpus,
) -> Result<PathBuf, TranslateError> {
    let prompt = build_translation_prompt(&language.name, &corpus.to_pretty_json());

    let response = client
        .generate(&prompt)
        .await
        .map_err(TranslateError::Service)?;
    debug!(
        "Raw response for {} ({}):\n{}",
        language.name, language.code, response
    );

    let translated = match extract_json_object(&response) {
        Ok(map) => map,
        Err(reason) => {
            warn!(
                "Failed to parse JSON for {} ({}): {}\nRaw response was:\n{}",
                language.name, language.code, reason, response
            );
            return Err(TranslateError::Extraction {
                reason,
                raw_response: response,
            });
        }
    };

    let keys = KeyReport::compare(corpus, &translated);
    if !keys.is_clean() {
        warn!(
            "Key mismatch for {} ({}): missing {:?}, unexpected {:?}",
            language.name, language.code, keys.missing, keys.unexpected
        );
    }

    let path = write_translation(output_dir, &language.code, &translated)?;
    info!("✔ {:<15} → {}", language.name, path.display());

    Ok(path)
}
