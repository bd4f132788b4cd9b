//! Generator collaborators: produce replacement comment text for one entity.

mod chat;
mod fallback;
mod heuristic;
mod prompt;

pub use chat::{ChatGenerator, ChatMessage, ChatOptions, ChatTransport, ReqwestTransport};
pub use fallback::FallbackGenerator;
pub use heuristic::HeuristicGenerator;
pub use prompt::PromptBuilder;

use thiserror::Error;

use crate::checker::BriefStyle;
use crate::config::GeneratorConfig;
use crate::guidelines::Guidelines;
use crate::recovery::Entity;

/// Input for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// The entity, with its line in the current buffer.
    pub entity: &'a Entity,
    /// Buffer lines surrounding the entity.
    pub context: &'a [String],
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("{provider} is unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("request to {provider} failed: {message}")]
    Request { provider: String, message: String },

    #[error("{provider} returned HTTP {status}")]
    Status { provider: String, status: u16 },

    #[error("{provider} returned a malformed response: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("{provider} returned empty text")]
    Empty { provider: String },

    #[error("all generators failed: {0}")]
    Exhausted(String),
}

/// Produces a documentation comment for a single entity.
pub trait Generator: Send + Sync {
    /// Name used in logs and skipped-fix reports.
    fn name(&self) -> &str;

    /// Return comment text for the entity, or fail.
    ///
    /// # Errors
    /// Returns an error when no usable text could be produced.
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GeneratorError>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GeneratorError> {
        (**self).generate(request)
    }
}

/// Build the generator chain described by the configuration.
///
/// Providers are tried in order. Providers whose API key variable is unset
/// are skipped. With `offline`, or when no provider is usable, the heuristic
/// backend is used alone.
#[must_use]
pub fn build_generator(
    config: &GeneratorConfig,
    guidelines: &Guidelines,
    style: &BriefStyle,
) -> Box<dyn Generator> {
    let heuristic =
        || -> Box<dyn Generator> { Box::new(HeuristicGenerator::with_style(style.clone())) };
    if config.offline {
        tracing::info!("using offline heuristic generator");
        return heuristic();
    }

    let options = ChatOptions::from_config(config);
    let mut chain: Vec<Box<dyn Generator>> = Vec::new();
    for provider in &config.providers {
        let api_key = match provider.api_key_env.as_deref() {
            Some(var) => match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => Some(key),
                _ => {
                    tracing::warn!(provider = %provider.name, env = var, "API key not set, skipping provider");
                    continue;
                }
            },
            None => None,
        };
        let transport = ReqwestTransport::new(options.timeout);
        chain.push(Box::new(ChatGenerator::new(
            provider.name.clone(),
            provider.base_url.clone(),
            provider.model.clone(),
            api_key,
            options.clone(),
            PromptBuilder::new(guidelines.clone()),
            transport,
        )));
    }
    if config.fallback_heuristic {
        chain.push(heuristic());
    }

    let Some(generator) = FallbackGenerator::chain(chain) else {
        tracing::warn!("no generator provider available, using offline heuristic generator");
        return heuristic();
    };
    tracing::info!(chain = generator.name(), "generator chain ready");
    generator
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
