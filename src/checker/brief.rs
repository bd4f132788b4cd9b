pub const DEFAULT_FILLER_WORDS: &[&str] =
    &["this", "the", "a", "an", "method", "function", "given"];

pub const DEFAULT_VERB_STEMS: &[&str] = &[
    "get",
    "set",
    "return",
    "create",
    "build",
    "check",
    "count",
    "make",
    "find",
    "add",
    "remove",
    "update",
    "compute",
    "calculate",
    "initialize",
    "clear",
    "reset",
    "validate",
    "process",
];

/// Why a method brief does not open with a base-form verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BriefViolation {
    /// Opens with an article or other filler word.
    FillerWord(String),
    /// Third-person verb such as `Gets`; carries the capitalized base form.
    ThirdPerson { word: String, base: String },
}

/// Word lists used to judge the opening word of a method brief.
#[derive(Debug, Clone)]
pub struct BriefStyle {
    filler_words: Vec<String>,
    verb_stems: Vec<String>,
}

impl Default for BriefStyle {
    fn default() -> Self {
        Self::new(
            DEFAULT_FILLER_WORDS.iter().map(ToString::to_string),
            DEFAULT_VERB_STEMS.iter().map(ToString::to_string),
        )
    }
}

impl BriefStyle {
    pub fn new(
        filler_words: impl IntoIterator<Item = String>,
        verb_stems: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            filler_words: filler_words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            verb_stems: verb_stems.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn is_filler(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.filler_words.iter().any(|w| *w == word)
    }

    /// Base form of a third-person verb from the stem list, e.g. `builds` -> `build`.
    #[must_use]
    pub fn base_form(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        ["s", "es"]
            .iter()
            .filter_map(|suffix| lower.strip_suffix(suffix))
            .find(|root| !root.is_empty() && self.verb_stems.iter().any(|stem| stem == root))
            .map(ToString::to_string)
    }

    /// Judge the opening word of `brief`.
    #[must_use]
    pub fn check(&self, brief: &str) -> Option<BriefViolation> {
        let word = first_word(brief)?;
        if self.is_filler(word) {
            return Some(BriefViolation::FillerWord(word.to_string()));
        }
        self.base_form(word).map(|base| BriefViolation::ThirdPerson {
            word: word.to_string(),
            base: capitalize(&base),
        })
    }
}

/// First alphabetic word of `text`, without trailing punctuation.
#[must_use]
pub fn first_word(text: &str) -> Option<&str> {
    let word = text.split_whitespace().next()?;
    let word = word.trim_end_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() || !word.starts_with(|c: char| c.is_alphabetic()) {
        return None;
    }
    Some(word)
}

#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "brief_tests.rs"]
mod tests;
