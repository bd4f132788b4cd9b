use serde::Serialize;

use crate::recovery::Entity;

/// Category of a documentation violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingDocumentation,
    /// `@`-style commands where backslash style is required.
    WrongStyle,
    /// Explicit `\brief` or `\details`.
    WrongCommand,
    /// Bad comment delimiter, or a gap inside the parameter list.
    WrongFormat,
    /// Documentation attached to an inline definition.
    WrongLocation,
    /// Brief does not open with a base-form verb.
    WrongBriefStyle,
}

impl IssueKind {
    pub const ALL: [Self; 6] = [
        Self::MissingDocumentation,
        Self::WrongStyle,
        Self::WrongCommand,
        Self::WrongFormat,
        Self::WrongLocation,
        Self::WrongBriefStyle,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingDocumentation => "missing_documentation",
            Self::WrongStyle => "wrong_style",
            Self::WrongCommand => "wrong_command",
            Self::WrongFormat => "wrong_format",
            Self::WrongLocation => "wrong_location",
            Self::WrongBriefStyle => "wrong_brief_style",
        }
    }

    /// Stable rule identifier used in SARIF output.
    #[must_use]
    pub const fn rule_id(self) -> &'static str {
        match self {
            Self::MissingDocumentation => "doxy-guard/missing-documentation",
            Self::WrongStyle => "doxy-guard/wrong-style",
            Self::WrongCommand => "doxy-guard/wrong-command",
            Self::WrongFormat => "doxy-guard/wrong-format",
            Self::WrongLocation => "doxy-guard/wrong-location",
            Self::WrongBriefStyle => "doxy-guard/wrong-brief-style",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingDocumentation => "Declaration requires a Doxygen comment",
            Self::WrongStyle => "Use backslash-style commands, not @-style",
            Self::WrongCommand => "Do not use \\brief or \\details; the first sentence is the brief",
            Self::WrongFormat => "Use /// or /** */ comments with a compact parameter list",
            Self::WrongLocation => "Document methods at their declaration, not their definition",
            Self::WrongBriefStyle => "Start method briefs with a base-form verb",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the patch engine addresses an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Remedy {
    /// Token rewrite inside the existing block; line count unchanged.
    InPlace,
    /// Drop blank lines inside the parameter list.
    Compact,
    /// Delete the block and insert freshly generated text.
    Regenerate,
    /// Insert generated text above the entity.
    Insert,
    /// Reported only.
    Manual,
}

/// A single compliance violation for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub entity: Entity,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub remedy: Remedy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Line of the entity the issue refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.entity.line
    }
}
