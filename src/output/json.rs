use serde::Serialize;

use crate::checker::{Issue, IssueKind, Severity};
use crate::error::Result;
use crate::recovery::EntityKind;
use crate::validator::FileReport;

use super::{OutputFormatter, RunSummary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileResult>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    files_with_issues: usize,
    total_entities: usize,
    entities_with_issues: usize,
    issues_found: usize,
    errors: usize,
    warnings: usize,
    compliance: f64,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    total_entities: usize,
    issues_found: usize,
    compliance: f64,
    issues: Vec<IssueResult>,
}

#[derive(Serialize)]
struct IssueResult {
    line: usize,
    entity_kind: EntityKind,
    entity: String,
    kind: IssueKind,
    severity: Severity,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let summary = RunSummary::from_reports(reports);
        let output = JsonOutput {
            summary: Summary {
                total_files: summary.files,
                files_with_issues: summary.files_with_issues,
                total_entities: summary.entities,
                entities_with_issues: summary.entities_with_issues,
                issues_found: summary.issues,
                errors: summary.errors,
                warnings: summary.warnings,
                compliance: summary.compliance(),
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileResult {
    let validation = &report.validation;
    FileResult {
        path: report.path.display().to_string(),
        total_entities: validation.total_entities(),
        issues_found: validation.issues_found(),
        compliance: validation.compliance(),
        issues: validation.issues.iter().map(convert_issue).collect(),
    }
}

fn convert_issue(issue: &Issue) -> IssueResult {
    IssueResult {
        line: issue.line(),
        entity_kind: issue.entity.kind,
        entity: issue.entity.name.clone(),
        kind: issue.kind,
        severity: issue.severity,
        message: issue.message.clone(),
        suggestion: issue.suggestion.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
