//! Source corpus and language catalog.
//!
//! Both are plain values handed to the run driver at startup. Neither is
//! mutated during a run.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Ordered mapping from a stable key to the English display string.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCorpus {
    entries: Map<String, Value>,
}

impl SourceCorpus {
    /// Build a corpus from key/value pairs, keeping their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { entries }
    }

    /// Load a corpus from a JSON file holding a flat object of strings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid corpus file {}", path.display()))
    }

    /// Parse a corpus from JSON text. Every value must be a string.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Corpus is not valid JSON")?;
        let Value::Object(entries) = value else {
            bail!("Corpus must be a JSON object");
        };
        if let Some((key, _)) = entries.iter().find(|(_, v)| !v.is_string()) {
            bail!("Corpus value for '{}' is not a string", key);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Pretty JSON with two-space indentation. Non-ASCII text stays literal.
    pub fn to_pretty_json(&self) -> String {
        // Serializing a map of strings cannot fail
        serde_json::to_string_pretty(&self.entries).unwrap_or_default()
    }
}

/// One entry of the language catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable name used in the prompt (e.g., "French")
    pub name: String,
    /// Short code used for file placement (e.g., "fr", "en-GB")
    pub code: String,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Whether this entry is a form of the source language, by exact or
    /// prefixed code match ("en", "en-US", "en-GB" for source "en").
    pub fn is_source_language(&self, source_code: &str) -> bool {
        self.code.starts_with(source_code)
    }
}

/// Ordered list of target languages. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        Self { entries }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, code)| LanguageEntry::new(name, code))
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The UI strings shipped with the chat widget.
pub fn default_corpus() -> SourceCorpus {
    SourceCorpus::from_pairs([
        ("Go back to main menu", "Go back to main menu"),
        ("Clear History", "Clear History"),
        ("Please contact us.", "Please contact us."),
        ("We will reply back.", "We will reply back."),
        ("Documents", "Documents"),
        ("Important Links", "Important Links"),
        ("Leave your email", "Leave your email"),
        (
            "Cookie Consent",
            "We are tracking your Cookie. If you don't agree, please email us.",
        ),
        ("Type your message", "Type your message here..."),
        (
            "Shopify placeholder",
            "Ask about orders, refunds, or discounts...",
        ),
        (
            "Shopify greeting",
            "How can I help you today? Please select one of the following services:",
        ),
        ("Order Status", "Order Status"),
        ("Refund", "Refund"),
        ("Discount", "Discount"),
        ("Name", "Name"),
        ("Email", "Email"),
        ("Note", "Note"),
        ("Send", "Send"),
        ("Message", "Message"),
        ("Phone Number", "Phone Number"),
        ("Phone", "Phone"),
        ("Send to WhatsApp", "Send to WhatsApp"),
        ("Sending...", "Sending..."),
        ("Submit", "Submit"),
        ("Write your note", "Write your note"),
        ("John Doe", "John Doe"),
        (
            "We have received your details.",
            "We have received your details.",
        ),
        (
            "WhatsApp message sent successfully!",
            "WhatsApp message sent successfully!",
        ),
        (
            "Sorry there is some problem. Please try again.",
            "Sorry there is some problem. Please try again.",
        ),
    ])
}

/// All languages the widget ships with, English variants included.
pub fn default_catalog() -> LanguageCatalog {
    LanguageCatalog::from_pairs([
        ("English", "en"),
        ("Hindi", "hi"),
        ("Tamil", "ta"),
        ("Telugu", "te"),
        ("Kannada", "kn"),
        ("Malayalam", "ml"),
        ("Marathi", "mr"),
        ("Gujarati", "gu"),
        ("Punjabi", "pa"),
        ("Bengali", "bn"),
        ("Odia", "or"),
        ("Assamese", "as"),
        ("Urdu", "ur"),
        ("English (US)", "en-US"),
        ("English (UK)", "en-GB"),
        ("French", "fr"),
        ("Spanish", "es"),
        ("German", "de"),
        ("Italian", "it"),
        ("Portuguese", "pt"),
        ("Russian", "ru"),
        ("Chinese", "zh"),
        ("Japanese", "ja"),
        ("Korean", "ko"),
        ("Arabic", "ar"),
        ("Turkish", "tr"),
        ("Polish", "pl"),
        ("Dutch", "nl"),
        ("Swedish", "sv"),
        ("Finnish", "fi"),
        ("Norwegian", "no"),
        ("Danish", "da"),
        ("Czech", "cs"),
        ("Greek", "el"),
        ("Hebrew", "he"),
        ("Indonesian", "id"),
        ("Thai", "th"),
        ("Vietnamese", "vi"),
        ("Ukrainian", "uk"),
        ("Hungarian", "hu"),
        ("Romanian", "ro"),
        ("Slovak", "sk"),
        ("Bulgarian", "bg"),
        ("Croatian", "hr"),
        ("Serbian", "sr"),
        ("Malay", "ms"),
        ("Tagalog", "tl"),
        ("Persian", "fa"),
    ])
}
