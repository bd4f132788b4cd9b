use std::fmt::Write;

use crate::checker::{Issue, Severity};
use crate::error::Result;
use crate::validator::FileReport;

use super::{OutputFormatter, RunSummary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn format_report(&self, report: &FileReport, output: &mut String) {
        let validation = &report.validation;
        if validation.is_clean() {
            let _ = writeln!(
                output,
                "{} {} ({} entities)",
                self.paint("✓", ansi::GREEN),
                report.path.display(),
                validation.total_entities()
            );
            return;
        }

        let (icon, color) = if validation.error_count() > 0 {
            ("✗", ansi::RED)
        } else {
            ("⚠", ansi::YELLOW)
        };
        let _ = writeln!(
            output,
            "{} {} ({} issues, {:.1}% compliant)",
            self.paint(icon, color),
            report.path.display(),
            validation.issues_found(),
            validation.compliance()
        );
        for issue in &validation.issues {
            self.format_issue(issue, output);
        }
    }

    fn format_issue(&self, issue: &Issue, output: &mut String) {
        let severity = self.paint(issue.severity.as_str(), Self::severity_color(issue.severity));
        let _ = writeln!(
            output,
            "   {}: {severity} [{}] {}: {}",
            issue.line(),
            issue.kind,
            issue.entity.label(),
            issue.message
        );
        if let Some(suggestion) = &issue.suggestion {
            let _ = writeln!(output, "      suggestion: {}", self.paint(suggestion, ansi::CYAN));
        }
        if self.verbose >= 1 {
            let _ = writeln!(output, "      > {}", issue.entity.text.trim());
        }
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let errors = self.paint(&summary.errors.to_string(), ansi::RED);
        let warnings = self.paint(&summary.warnings.to_string(), ansi::YELLOW);
        format!(
            "Summary: {} files checked, {} with issues, {errors} errors, {warnings} warnings, {:.1}% of {} entities compliant",
            summary.files,
            summary.files_with_issues,
            summary.compliance(),
            summary.entities
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            // Clean files only in verbose mode
            if report.validation.is_clean() && self.verbose == 0 {
                continue;
            }
            self.format_report(report, &mut output);
            output.push('\n');
        }

        let summary = RunSummary::from_reports(reports);
        let _ = writeln!(output, "{}", self.format_summary(&summary));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
