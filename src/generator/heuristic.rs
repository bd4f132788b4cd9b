use super::{GenerationRequest, Generator, GeneratorError};
use crate::checker::{BriefStyle, BriefViolation, capitalize};
use crate::recovery::{Entity, EntityKind, parameter_names};

/// Verb used when a method name does not start with one.
const FALLBACK_VERB: &str = "Handle";

/// Deterministic offline backend deriving a brief from the entity name.
#[derive(Debug, Clone, Default)]
pub struct HeuristicGenerator {
    style: BriefStyle,
}

impl HeuristicGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_style(style: BriefStyle) -> Self {
        Self { style }
    }

    fn brief(&self, entity: &Entity) -> String {
        match entity.kind {
            EntityKind::Class | EntityKind::MemberVariable => sentence(&split_identifier(&entity.name)),
            EntityKind::Method if entity.is_constructor() => {
                let phrase = lower_first(&sentence(&split_identifier(&entity.name)));
                let article = if phrase.starts_with(['a', 'e', 'i', 'o', 'u']) {
                    "an"
                } else {
                    "a"
                };
                format!("Construct {article} {phrase}")
            }
            EntityKind::Method => self.method_brief(&entity.name),
        }
    }

    fn method_brief(&self, name: &str) -> String {
        if let Some(symbol) = name.strip_prefix("operator") {
            return format!("Apply operator{symbol}.");
        }
        let mut words = split_identifier(name);
        if words.is_empty() {
            words.push(FALLBACK_VERB.to_string());
        }
        match self.style.check(&words[0]) {
            Some(BriefViolation::ThirdPerson { base, .. }) => words[0] = base,
            Some(BriefViolation::FillerWord(_)) => words.insert(0, FALLBACK_VERB.to_string()),
            None => {}
        }
        sentence(&words)
    }
}

impl Generator for HeuristicGenerator {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GeneratorError> {
        let entity = request.entity;
        let brief = self.brief(entity);
        let params = entity
            .method
            .as_ref()
            .map(|m| parameter_names(&m.signature))
            .unwrap_or_default();

        if params.is_empty() {
            return Ok(format!("/// {brief}"));
        }

        let mut lines = vec!["/**".to_string(), format!(" * {brief}")];
        lines.extend(
            params
                .iter()
                .map(|param| format!(" * \\param {param} {}", sentence(&split_identifier(param)))),
        );
        lines.push(" */".to_string());
        Ok(lines.join("\n"))
    }
}

/// Split `GetNumAngles`, `num_groups_` or `HTTPServer` into words.
#[must_use]
pub fn split_identifier(name: &str) -> Vec<String> {
    let name = name.strip_prefix("m_").unwrap_or(name);
    let mut words = Vec::new();
    for part in name.split('_').filter(|p| !p.is_empty()) {
        let chars: Vec<char> = part.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = c.is_uppercase()
                && prev.is_some_and(|p| {
                    p.is_lowercase()
                        || p.is_ascii_digit()
                        || (p.is_uppercase() && next.is_some_and(char::is_lowercase))
                });
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

/// Join words into a sentence: first word capitalized, acronyms kept, trailing period.
fn sentence(words: &[String]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let is_acronym = word.len() > 1 && word.chars().all(|c| c.is_uppercase() || c.is_ascii_digit());
        let word = if is_acronym {
            word.clone()
        } else if i == 0 {
            capitalize(&word.to_lowercase())
        } else {
            word.to_lowercase()
        };
        out.push(word);
    }
    format!("{}.", out.join(" "))
}

fn lower_first(text: &str) -> String {
    let first_word = text.split(' ').next().unwrap_or_default();
    let is_acronym = first_word.len() > 1
        && first_word
            .trim_end_matches('.')
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit());
    if is_acronym {
        return text.to_string();
    }
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod tests;
