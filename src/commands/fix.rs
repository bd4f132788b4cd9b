use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, FixArgs};
use crate::error::DoxyGuardError;
use crate::generator::{Generator, build_generator};
use crate::guidelines::Guidelines;
use crate::output::FixProgress;
use crate::scanner::collect_files;
use crate::validator::{FixOutcome, Validator};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::context::{
    FileReader, RealFileReader, apply_scan_overrides, display_path, load_config, read_source,
};

/// Where rewritten buffers go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FixMode {
    /// Write changed files in place.
    Write,
    /// Report only.
    DryRun,
    /// Print the rewritten buffer instead of writing it.
    Stdout,
}

impl FixMode {
    const fn from_args(args: &FixArgs) -> Self {
        if args.stdout {
            Self::Stdout
        } else if args.dry_run {
            Self::DryRun
        } else {
            Self::Write
        }
    }
}

/// Fix results for one file.
#[derive(Debug)]
pub(crate) struct FileFix {
    pub path: PathBuf,
    pub outcome: FixOutcome,
    pub changed: bool,
}

/// A file that could not be read or written.
#[derive(Debug)]
pub(crate) struct FileFailure {
    pub path: PathBuf,
    pub error: DoxyGuardError,
}

/// Per-file results of a fix run.
#[derive(Debug, Default)]
pub(crate) struct FixRun {
    pub fixes: Vec<FileFix>,
    pub failures: Vec<FileFailure>,
}

#[must_use]
pub fn run_fix(args: &FixArgs, cli: &Cli) -> i32 {
    match run_fix_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_fix_impl(args: &FixArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.scan.config.as_deref(), cli.no_config)?.config;
    apply_scan_overrides(&mut config, &args.scan);
    if args.offline {
        config.generator.offline = true;
    }

    // 2. Collect headers
    let files = collect_files(&args.scan.paths, &config.scanner)?;
    let mode = FixMode::from_args(args);
    if mode == FixMode::Stdout && files.len() != 1 {
        return Err(DoxyGuardError::Config(format!(
            "--stdout needs exactly one header, got {}",
            files.len()
        )));
    }

    // 3. Build the generator chain
    let guidelines = Guidelines::load(config.generator.reference_example.as_deref())?;
    let style = config.checker.brief_style();
    let generator = build_generator(&config.generator, &guidelines, &style);

    // 4. Fix files one at a time; generator calls see the edits made so far
    let validator = Validator::from_config(&config);
    let progress = FixProgress::new(files.len() as u64, cli.quiet || mode == FixMode::Stdout);
    let run = fix_files(&files, &validator, generator.as_ref(), &RealFileReader, mode, &progress);
    progress.finish();

    // 5. Report
    if mode == FixMode::Stdout {
        if let Some(fix) = run.fixes.first() {
            print!("{}", fix.outcome.text);
        }
        if !cli.quiet {
            eprint!("{}", format_fix_report(&run, mode, cli.verbose));
        }
    } else if !cli.quiet {
        print!("{}", format_fix_report(&run, mode, cli.verbose));
    }
    if cli.quiet {
        for failure in &run.failures {
            eprintln!("Error: {}", failure.error);
        }
    }

    if !run.failures.is_empty() {
        return Ok(EXIT_CONFIG_ERROR);
    }
    let unresolved = run.fixes.iter().any(|fix| !fix.outcome.skipped.is_empty());
    Ok(if unresolved {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    })
}

/// Validate and patch each file in order, writing changed files in `Write` mode.
///
/// A file that cannot be read or written is recorded as a failure and the
/// remaining files still run.
pub(crate) fn fix_files(
    files: &[PathBuf],
    validator: &Validator,
    generator: &dyn Generator,
    reader: &dyn FileReader,
    mode: FixMode,
    progress: &FixProgress,
) -> FixRun {
    let mut run = FixRun::default();
    for path in files {
        progress.start_file(path);
        match fix_file(path, validator, generator, reader, mode) {
            Ok(fix) => run.fixes.push(fix),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "fix failed");
                run.failures.push(FileFailure {
                    path: display_path(path),
                    error,
                });
            }
        }
        progress.inc();
    }
    run
}

fn fix_file(
    path: &Path,
    validator: &Validator,
    generator: &dyn Generator,
    reader: &dyn FileReader,
    mode: FixMode,
) -> crate::Result<FileFix> {
    let source = read_source(reader, path)?;
    let outcome = validator.fix(&source, generator);
    let changed = outcome.text != source;

    if changed && mode == FixMode::Write {
        reader
            .write(path, &outcome.text)
            .map_err(|source| DoxyGuardError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            applied = outcome.applied.len(),
            "rewrote header"
        );
    }

    Ok(FileFix {
        path: display_path(path),
        outcome,
        changed,
    })
}

pub(crate) fn format_fix_report(run: &FixRun, mode: FixMode, verbose: u8) -> String {
    let fixes = &run.fixes;
    let mut output = String::new();
    let verb = if mode == FixMode::Write {
        "Fixed"
    } else {
        "Would fix"
    };

    for fix in fixes {
        let outcome = &fix.outcome;
        if !fix.changed && outcome.skipped.is_empty() {
            if verbose >= 1 {
                let _ = writeln!(output, "✓ {}", fix.path.display());
            }
            continue;
        }
        let _ = writeln!(
            output,
            "{verb} {}: {} applied, {} skipped",
            fix.path.display(),
            outcome.applied.len(),
            outcome.skipped.len()
        );
        if verbose >= 1 {
            for applied in &outcome.applied {
                let _ = writeln!(
                    output,
                    "   {}: {} {}",
                    applied.line,
                    applied.action.as_str(),
                    applied.entity
                );
            }
        }
        for skipped in &outcome.skipped {
            let _ = writeln!(
                output,
                "   {}: skipped {}: {}",
                skipped.line, skipped.entity, skipped.reason
            );
        }
    }

    for failure in &run.failures {
        let _ = writeln!(output, "✗ {}: {}", failure.path.display(), failure.error);
    }

    let changed = fixes.iter().filter(|fix| fix.changed).count();
    let applied: usize = fixes.iter().map(|fix| fix.outcome.applied.len()).sum();
    let skipped: usize = fixes.iter().map(|fix| fix.outcome.skipped.len()).sum();
    let _ = write!(
        output,
        "Summary: {} files processed, {changed} changed, {applied} fixes applied, {skipped} skipped",
        fixes.len()
    );
    if !run.failures.is_empty() {
        let _ = write!(output, ", {} failed", run.failures.len());
    }
    output.push('\n');
    output
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
