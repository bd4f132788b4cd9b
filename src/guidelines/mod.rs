//! Static documentation rules and the reference example used to shape generator prompts.

use std::path::Path;

use crate::error::{DoxyGuardError, Result};

const BUILTIN_RULES: &str = include_str!("rules.md");
const BUILTIN_REFERENCE: &str = include_str!("reference.h");
const BUILTIN_REFERENCE_NAME: &str = "reference.h";

/// Read-only rule text plus a reference header written in the expected style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidelines {
    reference_name: String,
    reference_example: String,
}

impl Default for Guidelines {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Guidelines {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            reference_name: BUILTIN_REFERENCE_NAME.to_string(),
            reference_example: BUILTIN_REFERENCE.to_string(),
        }
    }

    /// Use the header at `path` as the reference example.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn with_reference_file(path: &Path) -> Result<Self> {
        let reference_example =
            std::fs::read_to_string(path).map_err(|source| DoxyGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let reference_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self {
            reference_name,
            reference_example,
        })
    }

    /// Built-in guidelines, or the configured reference file when one is given.
    ///
    /// # Errors
    /// Returns an error if a configured reference file cannot be read.
    pub fn load(reference: Option<&Path>) -> Result<Self> {
        reference.map_or_else(|| Ok(Self::builtin()), Self::with_reference_file)
    }

    #[must_use]
    pub const fn rules(&self) -> &'static str {
        BUILTIN_RULES
    }

    #[must_use]
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    #[must_use]
    pub fn reference_example(&self) -> &str {
        &self.reference_example
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
