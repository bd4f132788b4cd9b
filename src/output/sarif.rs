use serde::Serialize;

use crate::checker::{Issue, IssueKind, Severity};
use crate::error::Result;
use crate::recovery::EntityKind;
use crate::validator::FileReport;

use super::OutputFormatter;

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
pub struct SarifFormatter;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "doxy-guard";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: &'static str,
    name: &'static str,
    short_description: MultiformatMessageString,
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
    properties: ResultProperties,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
    uri_base_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultProperties {
    entity_kind: EntityKind,
    entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

const fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

/// Rule name in `PascalCase`, as SARIF viewers display it.
const fn rule_name(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::MissingDocumentation => "MissingDocumentation",
        IssueKind::WrongStyle => "WrongStyle",
        IssueKind::WrongCommand => "WrongCommand",
        IssueKind::WrongFormat => "WrongFormat",
        IssueKind::WrongLocation => "WrongLocation",
        IssueKind::WrongBriefStyle => "WrongBriefStyle",
    }
}

/// Level a rule reports at unless an issue says otherwise.
const fn default_level(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::WrongLocation | IssueKind::WrongBriefStyle => "warning",
        _ => "error",
    }
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        IssueKind::ALL
            .iter()
            .map(|&kind| ReportingDescriptor {
                id: kind.rule_id(),
                name: rule_name(kind),
                short_description: MultiformatMessageString {
                    text: kind.description(),
                },
                default_configuration: ReportingConfiguration {
                    level: default_level(kind),
                },
            })
            .collect()
    }

    fn convert_issue(report: &FileReport, issue: &Issue) -> SarifResult {
        let rule_index = IssueKind::ALL
            .iter()
            .position(|kind| *kind == issue.kind)
            .unwrap_or_default();

        // Convert path to URI format (forward slashes)
        let uri = report.path.display().to_string().replace('\\', "/");

        SarifResult {
            rule_id: issue.kind.rule_id(),
            rule_index,
            level: level(issue.severity),
            message: Message {
                text: format!("{}: {}", issue.entity.label(), issue.message),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri,
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: issue.line(),
                    },
                },
            }],
            properties: ResultProperties {
                entity_kind: issue.entity.kind,
                entity: issue.entity.name.clone(),
                suggestion: issue.suggestion.clone(),
            },
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let results: Vec<SarifResult> = reports
            .iter()
            .flat_map(|report| {
                report
                    .validation
                    .issues
                    .iter()
                    .map(move |issue| Self::convert_issue(report, issue))
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
