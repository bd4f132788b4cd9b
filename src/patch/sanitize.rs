use crate::checker::DocRules;
use crate::docblock::comment_text;

/// Line starts that mark echoed code rather than comment prose.
const CODE_OPENERS: &[&str] = &[
    "class ",
    "struct ",
    "void ",
    "int ",
    "bool ",
    "size_t ",
    "const ",
    "virtual ",
    "static ",
    "explicit ",
    "template",
    "public:",
    "private:",
    "protected:",
    "#",
    "{",
    "}",
];

/// Reduce generator output to the comment lines it should contain.
///
/// Code fences are dropped, collection stops at the first echoed code line,
/// prose outside a comment is discarded and prose inside an open block gets a
/// `*` prefix. Openers are normalized to `///` and `/**`, `@` commands to
/// backslash style, and an unclosed block is closed. Returns trimmed lines,
/// or `None` when no comment text remains.
#[must_use]
pub fn sanitize(text: &str, rules: &DocRules) -> Option<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();
    let mut in_block = false;

    for raw in text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with("```") {
            continue;
        }

        let line = if trimmed.starts_with('*') && !in_block {
            if trimmed.starts_with("*/") {
                continue;
            }
            lines.push("/**".to_string());
            in_block = true;
            trimmed.to_string()
        } else if is_comment(trimmed) {
            normalize_opener(trimmed)
        } else if is_code(trimmed) {
            break;
        } else if in_block {
            format!("* {trimmed}")
        } else {
            tracing::trace!(line = trimmed, "dropping prose outside comment");
            continue;
        };

        if line.starts_with("/*") && !line.ends_with("*/") {
            in_block = true;
        } else if in_block && line.ends_with("*/") {
            in_block = false;
        }

        let line = rules.strip_explicit_commands(&rules.rewrite_at_commands(&line));
        lines.push(line.trim_end().to_string());
    }

    if in_block {
        lines.push("*/".to_string());
    }

    let has_text = lines.iter().any(|line| !comment_text(line).is_empty());
    has_text.then_some(lines)
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

fn is_code(line: &str) -> bool {
    CODE_OPENERS.iter().any(|opener| line.starts_with(opener))
        || line.ends_with(';')
        || line.ends_with('{')
}

fn normalize_opener(line: &str) -> String {
    for (from, to) in [("//!", "///"), ("/*!", "/**")] {
        if let Some(rest) = line.strip_prefix(from) {
            return format!("{to}{rest}");
        }
    }
    if let Some(rest) = line.strip_prefix("//")
        && !rest.starts_with('/')
    {
        return format!("///{rest}");
    }
    if let Some(rest) = line.strip_prefix("/*")
        && !rest.starts_with('*')
    {
        return format!("/**{rest}");
    }
    line.to_string()
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
