//! Configuration semantic validation.
//!
//! Checks values that parse correctly but cannot work: empty lists, zero
//! windows, out-of-range sampling settings and malformed globs.

use crate::config::Config;
use crate::{DoxyGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error naming the first offending key.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_checker_section(config)?;
    validate_generator_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(DoxyGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    if let Some(ext) = config
        .scanner
        .extensions
        .iter()
        .find(|ext| ext.trim().is_empty() || ext.starts_with('.'))
    {
        return Err(DoxyGuardError::Config(format!(
            "scanner.extensions entries must be non-empty and have no leading dot, got '{ext}'"
        )));
    }
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| DoxyGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_checker_section(config: &Config) -> Result<()> {
    if config.checker.doc_window == 0 {
        return Err(DoxyGuardError::Config(
            "checker.doc_window must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_generator_section(config: &Config) -> Result<()> {
    let generator = &config.generator;
    if generator.context_lines == 0 {
        return Err(DoxyGuardError::Config(
            "generator.context_lines must be at least 1".to_string(),
        ));
    }
    if !(0.0..=2.0).contains(&generator.temperature) {
        return Err(DoxyGuardError::Config(format!(
            "generator.temperature must be between 0.0 and 2.0, got {}",
            generator.temperature
        )));
    }
    if generator.max_tokens == 0 {
        return Err(DoxyGuardError::Config(
            "generator.max_tokens must be at least 1".to_string(),
        ));
    }
    for (i, provider) in generator.providers.iter().enumerate() {
        for (field, value) in [
            ("name", &provider.name),
            ("base_url", &provider.base_url),
            ("model", &provider.model),
        ] {
            if value.trim().is_empty() {
                return Err(DoxyGuardError::Config(format!(
                    "generator.providers[{i}].{field} must not be empty"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config_semantics(&Config::default()).is_ok());
    }

    #[test]
    fn empty_extensions_rejected() {
        let mut config = Config::default();
        config.scanner.extensions.clear();
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("scanner.extensions"));
    }

    #[test]
    fn dotted_extension_rejected() {
        let mut config = Config::default();
        config.scanner.extensions = vec![".hpp".to_string()];
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("'.hpp'"));
    }

    #[test]
    fn invalid_exclude_glob_rejected() {
        let mut config = Config::default();
        config.scanner.exclude = vec!["build/[".to_string()];
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(matches!(err, DoxyGuardError::InvalidPattern { .. }));
    }

    #[test]
    fn zero_doc_window_rejected() {
        let mut config = Config::default();
        config.checker.doc_window = 0;
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("checker.doc_window"));
    }

    #[test]
    fn zero_context_lines_rejected() {
        let mut config = Config::default();
        config.generator.context_lines = 0;
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("generator.context_lines"));
    }

    #[test]
    fn temperature_out_of_range_rejected() {
        let mut config = Config::default();
        config.generator.temperature = 2.5;
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("generator.temperature"));

        config.generator.temperature = -0.1;
        assert!(validate_config_semantics(&config).is_err());

        config.generator.temperature = 2.0;
        assert!(validate_config_semantics(&config).is_ok());
    }

    #[test]
    fn empty_provider_field_rejected() {
        let mut config = Config::default();
        config
            .generator
            .providers
            .push(ProviderConfig::new("local", "  ", "llama", None));
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("generator.providers[3].base_url"));
    }

    #[test]
    fn no_providers_is_valid() {
        let mut config = Config::default();
        config.generator.providers.clear();
        assert!(validate_config_semantics(&config).is_ok());
    }
}
