use std::fs;

use crate::cli::InitArgs;
use crate::{DoxyGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DoxyGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template()).map_err(|source| {
        DoxyGuardError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# doxy-guard configuration file

[scanner]
# Header extensions to scan when a directory is given
extensions = ["h", "hh", "hpp", "hxx", "h++"]

# Exclude patterns (glob syntax)
exclude = [
    "**/build/**",
    "**/third_party/**",
]

[checker]
# Lines scanned upward from a declaration when looking for its comment
doc_window = 15

# Treat warnings (brief style, parameter gaps) as failures in `check`
strict = false

# Words a method brief must not start with
# filler_words = ["this", "the", "a", "an", "method", "function", "given"]

# Verbs whose third-person form ("Gets", "Builds") is flagged in method briefs
# verb_stems = ["get", "set", "return", "create", "build"]

[generator]
# Use only the built-in heuristic generator (no network)
offline = false

# Fall back to the heuristic generator when every provider fails
fallback_heuristic = false

# Lines of context sent around each declaration
context_lines = 5

temperature = 0.2
max_tokens = 500
timeout_secs = 60

# Header written in the expected style, shown to the model as a reference
# reference_example = "include/angle_set.h"

# Providers are tried in order; providers whose key variable is unset are skipped
[[generator.providers]]
name = "groq"
base_url = "https://api.groq.com/openai/v1"
model = "llama-3.3-70b-versatile"
api_key_env = "GROQ_API_KEY"

[[generator.providers]]
name = "openai"
base_url = "https://api.openai.com/v1"
model = "gpt-3.5-turbo"
api_key_env = "OPENAI_API_KEY"

[[generator.providers]]
name = "ollama"
base_url = "http://localhost:11434/v1"
model = "llama3.2"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
