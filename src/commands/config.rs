use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, validate_config_semantics};
use crate::{DoxyGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DoxyGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| DoxyGuardError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => {
            let source = loaded
                .source
                .as_ref()
                .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
            Ok(format_config_text(&loaded.config, &source))
        }
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config, source: &str) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let _ = writeln!(output, "# source: {source}\n");

    output.push_str("[scanner]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    if !config.scanner.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);
    }

    output.push_str("\n[checker]\n");
    let _ = writeln!(output, "  doc_window = {}", config.checker.doc_window);
    let _ = writeln!(output, "  strict = {}", config.checker.strict);
    let _ = writeln!(output, "  filler_words = {:?}", config.checker.filler_words);
    let _ = writeln!(output, "  verb_stems = {:?}", config.checker.verb_stems);

    let generator = &config.generator;
    output.push_str("\n[generator]\n");
    let _ = writeln!(output, "  offline = {}", generator.offline);
    let _ = writeln!(output, "  fallback_heuristic = {}", generator.fallback_heuristic);
    let _ = writeln!(output, "  context_lines = {}", generator.context_lines);
    let _ = writeln!(output, "  temperature = {}", generator.temperature);
    let _ = writeln!(output, "  max_tokens = {}", generator.max_tokens);
    let _ = writeln!(output, "  timeout_secs = {}", generator.timeout_secs);
    if let Some(reference) = &generator.reference_example {
        let _ = writeln!(output, "  reference_example = \"{}\"", reference.display());
    }

    for provider in &generator.providers {
        output.push_str("\n[[generator.providers]]\n");
        let _ = writeln!(output, "  name = \"{}\"", provider.name);
        let _ = writeln!(output, "  base_url = \"{}\"", provider.base_url);
        let _ = writeln!(output, "  model = \"{}\"", provider.model);
        if let Some(env) = &provider.api_key_env {
            let _ = writeln!(output, "  api_key_env = \"{env}\"");
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
