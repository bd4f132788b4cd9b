use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::{BriefStyle, DEFAULT_FILLER_WORDS, DEFAULT_VERB_STEMS};
use crate::docblock::DEFAULT_DOC_WINDOW;

/// Root configuration, one section per pipeline stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Which files a directory argument expands to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Header extensions, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Documentation locator and compliance rule settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    /// Maximum number of lines scanned upward for a doc block.
    #[serde(default = "default_doc_window")]
    pub doc_window: usize,

    /// Treat warnings as failures in `check`.
    #[serde(default)]
    pub strict: bool,

    /// Words a method brief must not open with.
    #[serde(default = "default_filler_words")]
    pub filler_words: Vec<String>,

    /// Verb stems whose third-person form is flagged in method briefs.
    #[serde(default = "default_verb_stems")]
    pub verb_stems: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            doc_window: default_doc_window(),
            strict: false,
            filler_words: default_filler_words(),
            verb_stems: default_verb_stems(),
        }
    }
}

impl CheckerConfig {
    #[must_use]
    pub fn brief_style(&self) -> BriefStyle {
        BriefStyle::new(self.filler_words.clone(), self.verb_stems.clone())
    }
}

/// Comment text generation settings used by `fix`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Use only the deterministic heuristic backend.
    #[serde(default)]
    pub offline: bool,

    /// Append the heuristic backend to the end of the provider chain.
    #[serde(default)]
    pub fallback_heuristic: bool,

    /// Lines of context sent before and after the entity.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Header used as the style reference in prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_example: Option<PathBuf>,

    /// Providers tried in order, each falling back to the next.
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            offline: false,
            fallback_heuristic: false,
            context_lines: default_context_lines(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            reference_example: None,
            providers: default_providers(),
        }
    }
}

/// An OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub name: String,
    pub base_url: String,
    pub model: String,

    /// Environment variable holding the API key. Local servers need none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(name: &str, base_url: &str, model: &str, api_key_env: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            model: model.to_string(),
            api_key_env: api_key_env.map(str::to_string),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["h", "hh", "hpp", "hxx", "h++"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_doc_window() -> usize {
    DEFAULT_DOC_WINDOW
}

fn default_filler_words() -> Vec<String> {
    DEFAULT_FILLER_WORDS.iter().map(|w| (*w).to_string()).collect()
}

fn default_verb_stems() -> Vec<String> {
    DEFAULT_VERB_STEMS.iter().map(|w| (*w).to_string()).collect()
}

const fn default_context_lines() -> usize {
    5
}

const fn default_temperature() -> f32 {
    0.2
}

const fn default_max_tokens() -> u32 {
    500
}

const fn default_timeout_secs() -> u64 {
    60
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(
            "groq",
            "https://api.groq.com/openai/v1",
            "llama-3.3-70b-versatile",
            Some("GROQ_API_KEY"),
        ),
        ProviderConfig::new(
            "openai",
            "https://api.openai.com/v1",
            "gpt-3.5-turbo",
            Some("OPENAI_API_KEY"),
        ),
        ProviderConfig::new("ollama", "http://localhost:11434/v1", "llama3.2", None),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
