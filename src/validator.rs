//! Pipeline glue: recovery, location and checking, then patching.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::checker::{ComplianceChecker, Issue, Severity};
use crate::config::Config;
use crate::docblock::DocLocator;
use crate::generator::Generator;
use crate::patch::{AppliedFix, PatchEngine, SkippedFix};
use crate::recovery::{Entity, EntityRecovery};

/// Entities recovered from one buffer and the issues found on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub entities: Vec<Entity>,
    pub issues: Vec<Issue>,
}

impl Validation {
    #[must_use]
    pub fn total_entities(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn issues_found(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn entities_with_issues(&self) -> usize {
        self.issues
            .iter()
            .map(|issue| issue.entity.id)
            .collect::<HashSet<_>>()
            .len()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    /// Share of entities without issues, in percent. An empty file is fully compliant.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compliance(&self) -> f64 {
        let total = self.total_entities();
        if total == 0 {
            return 100.0;
        }
        (total - self.entities_with_issues()) as f64 / total as f64 * 100.0
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Result of validating and rewriting one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    /// Issues of the original buffer, before any fix.
    pub validation: Validation,
    pub text: String,
    pub applied: Vec<AppliedFix>,
    pub skipped: Vec<SkippedFix>,
}

/// Validation results for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub validation: Validation,
}

/// Runs the recovery, locate, check and patch stages over a buffer.
#[derive(Default)]
pub struct Validator {
    recovery: EntityRecovery,
    locator: DocLocator,
    checker: ComplianceChecker,
    engine: PatchEngine,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validator using the checker and generator sections of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let locator = DocLocator::new(config.checker.doc_window);
        Self {
            recovery: EntityRecovery::new(),
            locator,
            checker: ComplianceChecker::new(config.checker.brief_style()),
            engine: PatchEngine::new(locator, config.generator.context_lines),
        }
    }

    #[must_use]
    pub fn validate(&self, source: &str) -> Validation {
        let lines: Vec<&str> = source.split('\n').collect();
        let entities = self.recovery.recover(source);
        let issues = entities
            .iter()
            .flat_map(|entity| {
                let doc = self.locator.locate(&lines, entity.line);
                self.checker.check(entity, doc.as_ref())
            })
            .collect();
        Validation { entities, issues }
    }

    /// Validate `source` and apply every fix the issues call for.
    #[must_use]
    pub fn fix(&self, source: &str, generator: &dyn Generator) -> FixOutcome {
        let validation = self.validate(source);
        let outcome = self.engine.apply(source, &validation.issues, generator);
        tracing::debug!(
            issues = validation.issues_found(),
            applied = outcome.applied.len(),
            skipped = outcome.skipped.len(),
            "fix pass complete"
        );
        FixOutcome {
            validation,
            text: outcome.text,
            applied: outcome.applied,
            skipped: outcome.skipped,
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
