use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{GenerationRequest, Generator, GeneratorError, PromptBuilder};
use crate::config::GeneratorConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Sampling and transport settings shared by every chat provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 500,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ChatOptions {
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// HTTP seam for chat completion calls.
pub trait ChatTransport: Send + Sync {
    /// POST a JSON body and return the status code and response body.
    ///
    /// # Errors
    /// Returns a description of the transport failure.
    fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<(u16, String), String>;
}

/// Production transport using blocking reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestTransport {
    timeout: Duration,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[cfg(not(tarpaulin_include))]
impl ChatTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<(u16, String), String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| format!("failed to create HTTP client: {e}"))?;

        let mut request = client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                format!("request timeout: {url}")
            } else if e.is_connect() {
                format!("failed to connect: {url}")
            } else {
                e.to_string()
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| format!("failed to read response: {e}"))?;
        Ok((status, text))
    }
}

/// OpenAI-compatible chat completion backend.
pub struct ChatGenerator<T: ChatTransport> {
    name: String,
    base_url: String,
    model: String,
    api_key: Option<String>,
    options: ChatOptions,
    prompt: PromptBuilder,
    transport: T,
}

impl<T: ChatTransport> ChatGenerator<T> {
    #[must_use]
    pub const fn new(
        name: String,
        base_url: String,
        model: String,
        api_key: Option<String>,
        options: ChatOptions,
        prompt: PromptBuilder,
        transport: T,
    ) -> Self {
        Self {
            name,
            base_url,
            model,
            api_key,
            options,
            prompt,
            transport,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn parse_response(&self, body: &str) -> Result<String, GeneratorError> {
        let response: ChatResponse =
            serde_json::from_str(body).map_err(|e| GeneratorError::MalformedResponse {
                provider: self.name.clone(),
                message: e.to_string(),
            })?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::MalformedResponse {
                provider: self.name.clone(),
                message: "missing choices[0].message.content".to_string(),
            })?;
        let content = content.trim();
        if content.is_empty() {
            return Err(GeneratorError::Empty {
                provider: self.name.clone(),
            });
        }
        Ok(content.to_string())
    }
}

impl<T: ChatTransport> Generator for ChatGenerator<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GeneratorError> {
        let messages = self.prompt.messages(request);
        let body = serde_json::to_value(ChatRequest {
            model: &self.model,
            messages: &messages,
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        })
        .map_err(|e| GeneratorError::Request {
            provider: self.name.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(provider = %self.name, model = %self.model, entity = %request.entity.label(), "requesting documentation");
        let (status, text) = self
            .transport
            .post_json(&self.endpoint(), self.api_key.as_deref(), &body)
            .map_err(|message| GeneratorError::Request {
                provider: self.name.clone(),
                message,
            })?;

        if !(200..300).contains(&status) {
            return Err(GeneratorError::Status {
                provider: self.name.clone(),
                status,
            });
        }
        self.parse_response(&text)
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
