use thiserror::Error;

/// Structural inconsistency found before an edit; the edit is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("line {line} is outside the buffer ({len} lines)")]
    OutOfRange { line: usize, len: usize },

    #[error("line {line} no longer holds the declaration of {entity}")]
    EntityMoved { line: usize, entity: String },

    #[error("no documentation block found above line {line}")]
    BlockMissing { line: usize },
}

/// File text as an ordered sequence of lines with explicit edits.
///
/// Lines are split on `\n` and keep any `\r`, so untouched lines are written
/// back byte for byte. Inserted lines follow the file's dominant line ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    crlf: bool,
}

impl LineBuffer {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let terminated = lines.len().saturating_sub(1);
        let with_cr = lines[..terminated]
            .iter()
            .filter(|line| line.ends_with('\r'))
            .count();
        Self {
            crlf: terminated > 0 && with_cr * 2 > terminated,
            lines,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub const fn is_crlf(&self) -> bool {
        self.crlf
    }

    /// Raw lines including any trailing `\r`.
    #[must_use]
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    /// Text of the 1-based `line` without its line ending.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the line does not exist.
    pub fn line(&self, line: usize) -> Result<&str, EditError> {
        let index = self.index(line)?;
        Ok(strip_cr(&self.lines[index]))
    }

    /// Replace the text of `line`, keeping its line ending.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the line does not exist.
    pub fn replace(&mut self, line: usize, text: &str) -> Result<(), EditError> {
        let index = self.index(line)?;
        let cr = if self.lines[index].ends_with('\r') { "\r" } else { "" };
        self.lines[index] = format!("{text}{cr}");
        Ok(())
    }

    /// Remove lines `start..=end` and return them raw.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the range is empty or leaves the buffer.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<Vec<String>, EditError> {
        let first = self.index(start)?;
        let last = self.index(end)?;
        if last < first {
            return Err(EditError::OutOfRange {
                line: end,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.drain(first..=last).collect())
    }

    /// Insert `lines` so the first one becomes line `before`, adding the
    /// buffer's line ending. Returns the number of lines inserted.
    ///
    /// # Errors
    /// Returns `OutOfRange` unless `1 <= before <= len + 1`.
    pub fn insert(&mut self, before: usize, lines: &[String]) -> Result<usize, EditError> {
        let cr = if self.crlf { "\r" } else { "" };
        let raw = lines.iter().map(|line| format!("{line}{cr}")).collect();
        self.insert_raw(before, raw)
    }

    /// Insert lines exactly as given, e.g. to restore a deleted range.
    ///
    /// # Errors
    /// Returns `OutOfRange` unless `1 <= before <= len + 1`.
    pub fn insert_raw(&mut self, before: usize, raw: Vec<String>) -> Result<usize, EditError> {
        if before == 0 || before > self.lines.len() + 1 {
            return Err(EditError::OutOfRange {
                line: before,
                len: self.lines.len(),
            });
        }
        let count = raw.len();
        let index = before - 1;
        self.lines.splice(index..index, raw);
        Ok(count)
    }

    /// Up to `radius` lines either side of `line`, plus the line itself.
    #[must_use]
    pub fn context(&self, line: usize, radius: usize) -> Vec<String> {
        if line == 0 || line > self.lines.len() {
            return Vec::new();
        }
        let start = line.saturating_sub(radius + 1);
        let end = (line + radius).min(self.lines.len());
        self.lines[start..end]
            .iter()
            .map(|l| strip_cr(l).to_string())
            .collect()
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    fn index(&self, line: usize) -> Result<usize, EditError> {
        if line == 0 || line > self.lines.len() {
            return Err(EditError::OutOfRange {
                line,
                len: self.lines.len(),
            });
        }
        Ok(line - 1)
    }
}

pub(crate) fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
