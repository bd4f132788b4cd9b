//! Documentation Locator: finds the comment block directly above a declaration.

use serde::Serialize;

/// Default number of lines scanned above a declaration.
pub const DEFAULT_DOC_WINDOW: usize = 15;

/// A contiguous documentation comment immediately preceding an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// 1-based first line of the block.
    pub start_line: usize,
    /// 1-based last line of the block (inclusive).
    pub end_line: usize,
    /// Raw lines in file order.
    pub lines: Vec<String>,
}

impl DocBlock {
    /// Number of lines the block spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line of the block with indentation removed.
    #[must_use]
    pub fn opener(&self) -> &str {
        self.lines.first().map_or("", |line| line.trim())
    }

    /// First line of text with comment markers and any explicit brief command removed.
    #[must_use]
    pub fn brief(&self) -> Option<String> {
        self.lines
            .iter()
            .map(|line| comment_text(line))
            .find(|text| !text.is_empty())
            .map(|text| {
                let text = ["\\brief", "@brief"]
                    .iter()
                    .find_map(|cmd| text.strip_prefix(cmd))
                    .unwrap_or(text);
                text.trim().to_string()
            })
            .filter(|text| !text.is_empty())
    }
}

/// Strip comment delimiters and leading `*` from one line.
#[must_use]
pub fn comment_text(line: &str) -> &str {
    let mut text = line.trim();
    for marker in ["///<", "///", "//!", "/**", "/*!", "/*"] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest;
            break;
        }
    }
    if let Some(rest) = text.strip_suffix("*/") {
        text = rest;
    }
    let text = text.trim();
    if text.starts_with('*') && !text.starts_with("*/") {
        return text.trim_start_matches('*').trim();
    }
    text
}

/// Bounded backward scan for the documentation above an entity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLocator {
    window: usize,
}

impl Default for DocLocator {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_WINDOW)
    }
}

impl DocLocator {
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }

    /// Locate the block ending just above the 1-based `entity_line`.
    ///
    /// Blank lines between the entity and its comment are tolerated; a blank
    /// line above a collected comment ends the block. A block comment whose
    /// opener lies beyond the window is treated as absent.
    #[must_use]
    pub fn locate<S: AsRef<str>>(&self, lines: &[S], entity_line: usize) -> Option<DocBlock> {
        if entity_line < 2 || entity_line > lines.len() {
            return None;
        }

        let mut collected: Vec<usize> = Vec::new();
        let mut in_block = false;
        let last = entity_line - 2;
        let first = last.saturating_sub(self.window.saturating_sub(1));

        for idx in (first..=last).rev() {
            let trimmed = lines[idx].as_ref().trim();
            if in_block {
                collected.push(idx);
                if trimmed.contains("/*") {
                    in_block = false;
                    break;
                }
                continue;
            }
            match LineClass::of(trimmed) {
                LineClass::Blank if collected.is_empty() => {}
                LineClass::Blank | LineClass::Code => break,
                LineClass::LineDoc => collected.push(idx),
                LineClass::BlockClose => {
                    collected.push(idx);
                    in_block = true;
                }
                LineClass::WholeBlock => {
                    collected.push(idx);
                    break;
                }
                LineClass::Continuation => {
                    if !collected.is_empty() {
                        break;
                    }
                    collected.push(idx);
                    in_block = true;
                }
            }
        }

        if in_block || collected.is_empty() {
            tracing::trace!(entity_line, "no documentation block");
            return None;
        }
        collected.reverse();
        let start = collected[0];
        let end = collected[collected.len() - 1];
        Some(DocBlock {
            start_line: start + 1,
            end_line: end + 1,
            lines: collected
                .iter()
                .map(|&idx| lines[idx].as_ref().to_string())
                .collect(),
        })
    }
}

/// Classification of a trimmed line seen while scanning upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Blank,
    /// `///` or `//!` line.
    LineDoc,
    /// `/* ... */` on a single line.
    WholeBlock,
    /// Ends a block comment opened on an earlier line.
    BlockClose,
    /// Interior `*` line of a block whose closer was not seen.
    Continuation,
    Code,
}

impl LineClass {
    fn of(trimmed: &str) -> Self {
        if trimmed.is_empty() {
            Self::Blank
        } else if trimmed.starts_with("///") || trimmed.starts_with("//!") {
            Self::LineDoc
        } else if trimmed.starts_with("/*") {
            if trimmed.len() >= 4 && trimmed.ends_with("*/") {
                Self::WholeBlock
            } else {
                Self::Code
            }
        } else if trimmed.contains("/*") {
            Self::Code
        } else if trimmed.ends_with("*/") {
            Self::BlockClose
        } else if trimmed.starts_with('*') {
            Self::Continuation
        } else {
            Self::Code
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
