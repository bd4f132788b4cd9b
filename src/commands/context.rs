use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::{ColorChoice, ScanArgs};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::error::DoxyGuardError;
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load and validate configuration, returning both config and its source.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or fails
/// semantic validation.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    validate_config_semantics(&result.config)?;
    if let Some(source) = &result.source {
        tracing::info!(path = %source.display(), "using configuration file");
    }
    Ok(result)
}

/// Apply `--ext` and `--exclude` on top of the scanner section.
pub(crate) fn apply_scan_overrides(config: &mut Config, scan: &ScanArgs) {
    if let Some(ref cli_extensions) = scan.ext {
        config.scanner.extensions.clone_from(cli_extensions);
    }
    config.scanner.exclude.extend(scan.exclude.iter().cloned());
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(|source| DoxyGuardError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

// =============================================================================
// IO Abstraction Traits for Testability
// =============================================================================

/// Trait for reading and writing header files (for testability).
pub trait FileReader: Send + Sync {
    /// Read a header as text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not UTF-8.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace a header's contents.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Read `path` through `reader`, tagging failures with the path.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read.
pub(crate) fn read_source(reader: &dyn FileReader, path: &Path) -> crate::Result<String> {
    reader.read(path).map_err(|source| DoxyGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Path as shown in reports: relative paths without a leading `./`.
#[must_use]
pub(crate) fn display_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
