//! Compliance Checker: decides per entity whether documentation is required
//! and whether the documentation present is well-formed.

mod brief;
mod issue;
mod policy;
mod rules;

pub use brief::{
    BriefStyle, BriefViolation, DEFAULT_FILLER_WORDS, DEFAULT_VERB_STEMS, capitalize, first_word,
};
pub use issue::{Issue, IssueKind, Remedy, Severity};
pub use policy::{entity_needs_doc, needs_doc};
pub use rules::DocRules;

use crate::docblock::DocBlock;
use crate::recovery::{Entity, EntityKind};

/// Pure function of an entity and its located documentation to a list of issues.
#[derive(Default)]
pub struct ComplianceChecker {
    rules: DocRules,
    brief: BriefStyle,
}

impl ComplianceChecker {
    #[must_use]
    pub fn new(brief: BriefStyle) -> Self {
        Self {
            rules: DocRules::new(),
            brief,
        }
    }

    #[must_use]
    pub fn check(&self, entity: &Entity, doc: Option<&DocBlock>) -> Vec<Issue> {
        let Some(doc) = doc else {
            if entity_needs_doc(entity) {
                return vec![issue(
                    entity,
                    IssueKind::MissingDocumentation,
                    Severity::Error,
                    Remedy::Insert,
                    format!("Missing Doxygen documentation for {}", entity.label()),
                )];
            }
            return Vec::new();
        };

        let mut issues = Vec::new();

        if entity.kind == EntityKind::Method && entity.is_definition() {
            issues.push(issue(
                entity,
                IssueKind::WrongLocation,
                Severity::Warning,
                Remedy::Manual,
                format!(
                    "Documentation for {} belongs at its declaration, not its inline definition",
                    entity.label()
                ),
            ));
        }

        if let Some(command) = self.rules.at_command(doc) {
            let mut found = issue(
                entity,
                IssueKind::WrongStyle,
                Severity::Error,
                Remedy::InPlace,
                format!("Use backslash-style commands: found @{command}"),
            );
            if command != "brief" {
                found.suggestion = Some(format!("\\{command}"));
            }
            issues.push(found);
        }

        if let Some(command) = self.rules.explicit_command(doc) {
            let remedy = if entity.kind == EntityKind::Class {
                Remedy::Regenerate
            } else {
                Remedy::InPlace
            };
            issues.push(issue(
                entity,
                IssueKind::WrongCommand,
                Severity::Error,
                remedy,
                format!("Do not use \\{command}: the first sentence is the brief"),
            ));
        }

        if DocRules::has_wrong_delimiter(doc) {
            issues.push(issue(
                entity,
                IssueKind::WrongFormat,
                Severity::Error,
                Remedy::Regenerate,
                format!(
                    "Use /// for single-line or /** */ for multi-line comments, found `{}`",
                    doc.opener()
                ),
            ));
        }

        if entity.kind == EntityKind::Method
            && !entity.is_constructor()
            && let Some(text) = doc.brief()
            && let Some(violation) = self.brief.check(&text)
        {
            issues.push(brief_issue(entity, violation));
        }

        if !self.rules.param_gaps(doc).is_empty() {
            issues.push(issue(
                entity,
                IssueKind::WrongFormat,
                Severity::Warning,
                Remedy::Compact,
                "Parameter list must be compact: remove blank lines between \\param entries"
                    .to_string(),
            ));
        }

        issues
    }
}

fn brief_issue(entity: &Entity, violation: BriefViolation) -> Issue {
    match violation {
        BriefViolation::FillerWord(word) => issue(
            entity,
            IssueKind::WrongBriefStyle,
            Severity::Warning,
            Remedy::Regenerate,
            format!("Brief should open with a verb in base form, not \"{word}\""),
        ),
        BriefViolation::ThirdPerson { word, base } => {
            let mut found = issue(
                entity,
                IssueKind::WrongBriefStyle,
                Severity::Warning,
                Remedy::Regenerate,
                format!("Use the base form \"{base}\" instead of \"{word}\""),
            );
            found.suggestion = Some(base);
            found
        }
    }
}

fn issue(
    entity: &Entity,
    kind: IssueKind,
    severity: Severity,
    remedy: Remedy,
    message: String,
) -> Issue {
    Issue {
        entity: entity.clone(),
        kind,
        severity,
        message,
        remedy,
        suggestion: None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
