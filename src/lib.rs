//! Translate a corpus of English UI strings into many languages using Gemini.
//!
//! The binary walks a language catalog, asks the model to translate the
//! corpus values for each language, extracts the JSON object from the reply
//! and writes it to `<output_dir>/<code>/translation.json`.

pub mod config;
pub mod corpus;
pub mod extract;
pub mod gemini;
pub mod runner;
pub mod translator;
