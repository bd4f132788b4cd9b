use std::fmt::Write;

use crate::cli::{Cli, GuidelinesArgs};
use crate::guidelines::Guidelines;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_guidelines(args: &GuidelinesArgs, cli: &Cli) -> i32 {
    match run_guidelines_impl(args, cli) {
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

/// Render the rule text and the reference example used in generator prompts.
///
/// `--reference` wins over the configured `generator.reference_example`.
///
/// # Errors
/// Returns an error if the configuration or the reference file cannot be read.
pub(crate) fn run_guidelines_impl(args: &GuidelinesArgs, cli: &Cli) -> Result<String> {
    let reference = match &args.reference {
        Some(path) => Some(path.clone()),
        None => load_config(None, cli.no_config)?.config.generator.reference_example,
    };
    let guidelines = Guidelines::load(reference.as_deref())?;
    Ok(format_guidelines(&guidelines))
}

#[must_use]
pub(crate) fn format_guidelines(guidelines: &Guidelines) -> String {
    let mut output = String::new();
    output.push_str(guidelines.rules().trim_end());
    let _ = writeln!(
        output,
        "\n\n## Reference example ({})\n",
        guidelines.reference_name()
    );
    output.push_str(guidelines.reference_example().trim_end());
    output.push('\n');
    output
}

#[cfg(test)]
#[path = "guidelines_tests.rs"]
mod tests;
