use std::path::PathBuf;

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::output::{RunSummary, formatter_for};
use crate::scanner::collect_files;
use crate::validator::{FileReport, Validator};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::context::{
    FileReader, RealFileReader, apply_scan_overrides, color_choice_to_mode, display_path,
    load_config, read_source, write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.scan.config.as_deref(), cli.no_config)?.config;
    apply_scan_overrides(&mut config, &args.scan);

    // 2. Collect headers
    let files = collect_files(&args.scan.paths, &config.scanner)?;

    // 3. Validate each file (parallel with rayon; each file is processed on one thread)
    let validator = Validator::from_config(&config);
    let reports = check_files(&files, &validator, &RealFileReader)?;

    // 4. Format and write output
    let formatter = formatter_for(args.format, color_choice_to_mode(cli.color), cli.verbose);
    let output = formatter.format(&reports)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Determine exit code
    let strict = args.strict || config.checker.strict;
    Ok(exit_code(&RunSummary::from_reports(&reports), strict, args.warn_only))
}

/// Validate every file, keeping the input order.
///
/// # Errors
/// Returns the first read error.
pub(crate) fn check_files(
    files: &[PathBuf],
    validator: &Validator,
    reader: &dyn FileReader,
) -> crate::Result<Vec<FileReport>> {
    files
        .par_iter()
        .map(|path| {
            let source = read_source(reader, path)?;
            let validation = validator.validate(&source);
            tracing::debug!(
                path = %path.display(),
                entities = validation.total_entities(),
                issues = validation.issues_found(),
                "checked file"
            );
            Ok(FileReport {
                path: display_path(path),
                validation,
            })
        })
        .collect()
}

pub(crate) const fn exit_code(summary: &RunSummary, strict: bool, warn_only: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }
    if summary.errors > 0 || (strict && summary.warnings > 0) {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
