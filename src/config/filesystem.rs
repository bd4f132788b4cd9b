//! Filesystem access used by config discovery, behind a trait so the loader
//! can run against an in-memory tree.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for `.doxy-guard.toml`.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory searched for `config.toml`, e.g.
    /// `~/.config/doxy-guard` on Linux.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// `std::fs` plus the platform config dir from `directories`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "doxy-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
