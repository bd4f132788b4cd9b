mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::{DoxyGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                DoxyGuardError::FileRead {
                    path,
                    source: e.into(),
                }
            })?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

/// Expand command-line paths into the header files to process.
///
/// Directories are walked and filtered. Explicit file arguments are kept even
/// when their extension is not configured, unless an exclude glob matches.
/// An empty `paths` list means the current directory.
///
/// # Errors
/// Returns an error for a missing path, an unreadable directory or an invalid
/// exclude pattern.
pub fn collect_files(paths: &[PathBuf], config: &ScannerConfig) -> Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    let default_root = [PathBuf::from(".")];
    let roots = if paths.is_empty() {
        &default_root[..]
    } else {
        paths
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            files.extend(DirectoryScanner::new(&filter).scan(root)?);
        } else if root.is_file() {
            if filter.is_excluded(root) {
                tracing::debug!(path = %root.display(), "excluded by pattern");
            } else {
                files.push(root.clone());
            }
        } else {
            return Err(DoxyGuardError::FileRead {
                path: root.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file or directory",
                ),
            });
        }
    }
    files.dedup();
    tracing::debug!(count = files.len(), "collected header files");
    Ok(files)
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, path: &Path) -> bool {
        (**self).should_include(path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
