use serde::Serialize;

/// Kind of declaration recovered from a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    MemberVariable,
    Method,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::MemberVariable => "member variable",
            Self::Method => "method",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// C++ access specifier in effect at a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    /// Parse the keyword of an access specifier line (`public`, `protected`, `private`).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Method-specific attributes of a recovered entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    /// The method's name equals the enclosing class name.
    pub is_constructor: bool,
    /// Defined inline (body on the declaration line) rather than only declared.
    pub is_definition: bool,
    /// Joined signature text, used to name parameters when generating docs.
    pub signature: String,
}

/// A declaration recovered from raw header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Position in recovery order; stable for the lifetime of a pass.
    pub id: usize,
    pub kind: EntityKind,
    /// 1-based line in the buffer the entity was recovered from.
    pub line: usize,
    pub name: String,
    pub enclosing_class: Option<String>,
    pub access: AccessLevel,
    /// Raw text of the declaration line.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<MethodInfo>,
}

impl Entity {
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.method.as_ref().is_some_and(|m| m.is_constructor)
    }

    #[must_use]
    pub fn is_definition(&self) -> bool {
        self.method.as_ref().is_some_and(|m| m.is_definition)
    }

    /// Leading whitespace of the declaration line.
    #[must_use]
    pub fn indentation(&self) -> &str {
        let trimmed = self.text.trim_start();
        &self.text[..self.text.len() - trimmed.len()]
    }

    /// Short human label, e.g. `method GetValue`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.enclosing_class {
            Some(class) if self.kind != EntityKind::Class => {
                format!("{} {class}::{}", self.kind, self.name)
            }
            _ => format!("{} {}", self.kind, self.name),
        }
    }
}
