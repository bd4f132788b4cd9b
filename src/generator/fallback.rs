use super::{GenerationRequest, Generator, GeneratorError};

/// Tries a primary generator and falls back to a secondary on failure.
pub struct FallbackGenerator {
    name: String,
    primary: Box<dyn Generator>,
    secondary: Box<dyn Generator>,
}

impl FallbackGenerator {
    #[must_use]
    pub fn new(primary: Box<dyn Generator>, secondary: Box<dyn Generator>) -> Self {
        let name = format!("{} -> {}", primary.name(), secondary.name());
        Self {
            name,
            primary,
            secondary,
        }
    }

    /// Fold generators into one chain tried in order, or `None` if empty.
    #[must_use]
    pub fn chain(generators: Vec<Box<dyn Generator>>) -> Option<Box<dyn Generator>> {
        generators
            .into_iter()
            .rev()
            .reduce(|secondary, primary| Box::new(Self::new(primary, secondary)))
    }
}

impl Generator for FallbackGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GeneratorError> {
        match self.primary.generate(request) {
            Ok(text) => Ok(text),
            Err(primary_err) => {
                tracing::warn!(
                    provider = self.primary.name(),
                    fallback = self.secondary.name(),
                    error = %primary_err,
                    "generator failed, trying fallback"
                );
                self.secondary.generate(request).map_err(|secondary_err| {
                    let rest = match secondary_err {
                        GeneratorError::Exhausted(inner) => inner,
                        other => other.to_string(),
                    };
                    GeneratorError::Exhausted(format!("{primary_err}; {rest}"))
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
