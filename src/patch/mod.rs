//! Patch Engine: applies an issue list to a line buffer.
//!
//! Fixes run in three phases. In-place token rewrites go first since they
//! never change the line count. Regeneration and compaction follow, then
//! insertion of missing documentation, each in descending line order.
//! Every edit shifts the recorded lines of the entities still pending, and
//! each entity's declaration text is verified before it is touched.

mod buffer;
mod engine;
mod sanitize;

pub use buffer::{EditError, LineBuffer};
pub use engine::{DEFAULT_CONTEXT_LINES, PatchEngine};
pub use sanitize::sanitize;

use serde::Serialize;

use crate::checker::IssueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixAction {
    /// Tokens rewritten inside the existing block.
    Rewrote,
    /// Blank lines removed from the parameter list.
    Compacted,
    /// Block replaced with generated text.
    Regenerated,
    /// Generated text inserted above the declaration.
    Inserted,
}

impl FixAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rewrote => "rewrote",
            Self::Compacted => "compacted",
            Self::Regenerated => "regenerated",
            Self::Inserted => "inserted",
        }
    }
}

/// A fix that was applied to the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFix {
    /// Entity label, e.g. `method Foo::Run`.
    pub entity: String,
    /// Line of the entity in the original input.
    pub line: usize,
    pub kinds: Vec<IssueKind>,
    pub action: FixAction,
}

/// A fix that was left unapplied, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFix {
    pub entity: String,
    pub line: usize,
    pub kinds: Vec<IssueKind>,
    pub reason: String,
}

/// Result of one patch pass. `text` is always a complete buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    pub text: String,
    pub applied: Vec<AppliedFix>,
    pub skipped: Vec<SkippedFix>,
}
