use std::fmt::Write;

use super::{ChatMessage, GenerationRequest};
use crate::guidelines::Guidelines;
use crate::recovery::EntityKind;

const SYSTEM_PROMPT: &str = "You write concise Doxygen comments for C++ headers. \
You follow the reference example's style exactly: short briefs, single-line /// \
comments where possible, and /** */ blocks with \\param lines only for constructors \
and methods that take parameters. You never output code.";

/// Builds the chat messages sent to a documentation provider.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    guidelines: Guidelines,
}

impl PromptBuilder {
    #[must_use]
    pub const fn new(guidelines: Guidelines) -> Self {
        Self { guidelines }
    }

    #[must_use]
    pub fn messages(&self, request: &GenerationRequest<'_>) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(self.user_prompt(request)),
        ]
    }

    /// The task description for one entity.
    #[must_use]
    pub fn user_prompt(&self, request: &GenerationRequest<'_>) -> String {
        let entity = request.entity;
        let mut prompt = String::new();

        let _ = writeln!(
            prompt,
            "Write the Doxygen comment for one {} in a C++ header.\n",
            entity.kind
        );
        let _ = writeln!(
            prompt,
            "## Reference example ({})\n```cpp\n{}\n```\n",
            self.guidelines.reference_name(),
            self.guidelines.reference_example().trim_end()
        );
        let _ = writeln!(prompt, "## Rules\n{}\n", self.guidelines.rules().trim_end());
        let _ = writeln!(
            prompt,
            "## Code around the declaration\n```cpp\n{}\n```\n",
            request.context.join("\n")
        );
        let _ = writeln!(
            prompt,
            "## Declaration to document\n{} `{}` at line {}:\n{}\n",
            entity.kind,
            entity.name,
            entity.line,
            entity.text.trim()
        );
        let _ = writeln!(prompt, "## Output\n{}", brief_hint(entity.kind));
        prompt.push_str(
            "Document only this declaration. Return only the comment: no code fences, \
no explanation, and no code. Use backslash commands such as \\param and \\return, \
never @param, \\brief or \\details.\n",
        );
        prompt
    }
}

fn brief_hint(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Class => "The brief is a short noun phrase, for example `/// Geometry manager for meshes.`",
        EntityKind::MemberVariable => {
            "The brief is a short noun phrase, for example `/// Spatial dimension of the domain.`"
        }
        EntityKind::Method => {
            "The brief starts with a verb in base form, for example `/// Build the geometry structures.`"
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
