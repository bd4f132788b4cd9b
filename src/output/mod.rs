mod json;
mod progress;
mod sarif;
mod text;

pub use json::JsonFormatter;
pub use progress::FixProgress;
pub use sarif::SarifFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::validator::FileReport;

/// Trait for formatting validation reports into various output formats.
pub trait OutputFormatter {
    /// Format the per-file reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Totals across all reports of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files: usize,
    pub files_with_issues: usize,
    pub entities: usize,
    pub entities_with_issues: usize,
    pub issues: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunSummary {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            let v = &report.validation;
            acc.files += 1;
            acc.files_with_issues += usize::from(!v.is_clean());
            acc.entities += v.total_entities();
            acc.entities_with_issues += v.entities_with_issues();
            acc.issues += v.issues_found();
            acc.errors += v.error_count();
            acc.warnings += v.warning_count();
            acc
        })
    }

    /// Share of entities without issues across all files, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compliance(&self) -> f64 {
        if self.entities == 0 {
            return 100.0;
        }
        (self.entities - self.entities_with_issues) as f64 / self.entities as f64 * 100.0
    }
}

/// Build the formatter for `format`.
#[must_use]
pub fn formatter_for(
    format: OutputFormat,
    color: ColorMode,
    verbose: u8,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Sarif => Box::new(SarifFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
