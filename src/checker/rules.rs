use regex::Regex;

use crate::docblock::{DocBlock, comment_text};

/// Comment openers accepted as the first line of a block.
const ACCEPTED_OPENERS: &[&str] = &["///", "/**", "*"];

/// Token patterns shared by the checker and the in-place fixer.
pub struct DocRules {
    at_command: Regex,
    at_brief: Regex,
    explicit_brief: Regex,
    param_line: Regex,
}

impl Default for DocRules {
    fn default() -> Self {
        Self::new()
    }
}

impl DocRules {
    #[must_use]
    pub fn new() -> Self {
        Self {
            at_command: Regex::new(r"@(param|return|throw|tparam|note|warning|brief)")
                .expect("Invalid regex"),
            at_brief: Regex::new(r"@brief\b[ \t]?").expect("Invalid regex"),
            explicit_brief: Regex::new(r"\\(brief|details)\b[ \t]?").expect("Invalid regex"),
            param_line: Regex::new(r"[\\@]param\b").expect("Invalid regex"),
        }
    }

    /// First `@`-style command in the block, without the `@`.
    #[must_use]
    pub fn at_command(&self, doc: &DocBlock) -> Option<String> {
        doc.lines
            .iter()
            .find_map(|line| self.at_command.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// First explicit `\brief` or `\details` in the block.
    #[must_use]
    pub fn explicit_command(&self, doc: &DocBlock) -> Option<String> {
        doc.lines
            .iter()
            .find_map(|line| self.explicit_brief.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// The block opens with something other than `///`, `/**` or `*`.
    #[must_use]
    pub fn has_wrong_delimiter(doc: &DocBlock) -> bool {
        let opener = doc.opener();
        !ACCEPTED_OPENERS
            .iter()
            .any(|prefix| opener.starts_with(prefix))
    }

    /// Indices of blank comment lines lying between two parameter lines.
    #[must_use]
    pub fn param_gaps(&self, doc: &DocBlock) -> Vec<usize> {
        let params: Vec<usize> = doc
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.param_line.is_match(line))
            .map(|(idx, _)| idx)
            .collect();
        if params.len() < 2 {
            return Vec::new();
        }
        params
            .windows(2)
            .flat_map(|pair| pair[0] + 1..pair[1])
            .filter(|&idx| comment_text(&doc.lines[idx]).is_empty())
            .collect()
    }

    /// Rewrite `@cmd` as `\cmd`; `@brief` is dropped.
    #[must_use]
    pub fn rewrite_at_commands(&self, line: &str) -> String {
        let without_brief = self.at_brief.replace_all(line, "");
        self.at_command
            .replace_all(&without_brief, "\\$1")
            .into_owned()
    }

    /// Remove `\brief` and `\details` tokens.
    #[must_use]
    pub fn strip_explicit_commands(&self, line: &str) -> String {
        self.explicit_brief.replace_all(line, "").into_owned()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
