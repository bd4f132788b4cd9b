use regex::Regex;

/// Keyword that opened a class scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKeyword {
    Class,
    Struct,
}

/// A recognised `class`/`struct` head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHead {
    pub keyword: ClassKeyword,
    pub name: String,
}

/// How a line containing a balanced parenthesis pair ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureForm {
    /// Trailing `;`, `virtual` or `= 0`.
    Declaration,
    /// Body opens on the same line.
    Definition,
    /// Signature without `;` or `{`; the body follows on a later line.
    Dangling,
}

/// Words that can never start a member variable declaration.
const NON_DECLARATION_WORDS: &[&str] = &[
    "break", "case", "class", "continue", "default", "delete", "do", "else", "enum", "for",
    "friend", "goto", "if", "namespace", "private", "protected", "public", "return", "struct",
    "switch", "template", "throw", "typedef", "union", "using", "while",
];

/// Identifiers that look like calls but are never methods.
const NON_METHOD_NAMES: &[&str] = &[
    "alignas", "alignof", "catch", "decltype", "for", "if", "noexcept", "return", "sizeof",
    "static_assert", "switch", "while",
];

const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void",
    "auto", "size_t",
];

/// Compiled patterns used by the recovery scanner.
pub struct Patterns {
    class_head: Regex,
    access_specifier: Regex,
    template_header: Regex,
    variable: Regex,
    signature_tail: Regex,
    defaulted: Regex,
    pure_virtual: Regex,
    trivial_getter: Regex,
    trivial_setter: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Patterns {
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_head: Regex::new(
                r"^(?:template\s*<.*>\s*)?(class|struct)\s+(?:\[\[.*?\]\]\s*)?(?:alignas\s*\([^)]*\)\s*)?(?:[A-Z][A-Z0-9_]+\s+)?([A-Za-z_]\w*)",
            )
            .expect("Invalid regex"),
            access_specifier: Regex::new(
                r"^(public|protected|private)\s*(?:Q_SLOTS\s*|slots\s*)?:(?:[^:]|$)",
            )
            .expect("Invalid regex"),
            template_header: Regex::new(r"^template\s*<.*>$").expect("Invalid regex"),
            variable: Regex::new(
                r"^(?:(?:static|const|constexpr|mutable|inline|volatile|thread_local|extern|unsigned|signed|long|short)\s+)*[A-Za-z_][\w:]*(?:\s*<.*>)?(?:\s*(?:const|volatile))?[\s*&]+(?:const\s+)?[*&]*\s*([A-Za-z_]\w*)\s*(?:\[[^\]]*\]\s*)*(?::\s*\w+\s*)?(?:=|\{|;|,)",
            )
            .expect("Invalid regex"),
            signature_tail: Regex::new(
                r"\)\s*(?:(?:const|override|final|noexcept|volatile|&&|&)\s*|noexcept\s*\([^)]*\)\s*|->\s*[\w:<>,\s*&]+)*$",
            )
            .expect("Invalid regex"),
            defaulted: Regex::new(r"=\s*(?:default|delete)\b").expect("Invalid regex"),
            pure_virtual: Regex::new(r"=\s*0\s*;").expect("Invalid regex"),
            trivial_getter: Regex::new(
                r"\{\s*return\s+[*&]?\s*(?:this->\w+|m_\w+|\w+_)\s*;\s*\}",
            )
            .expect("Invalid regex"),
            trivial_setter: Regex::new(
                r"\{\s*(?:this->\w+|m_\w+|\w+_)\s*=\s*[^;{}]+;\s*\}",
            )
            .expect("Invalid regex"),
        }
    }

    /// Match a class/struct head that opens a scope (forward declarations excluded).
    #[must_use]
    pub fn class_head(&self, code: &str) -> Option<ClassHead> {
        if is_forward_declaration(code) {
            return None;
        }
        let caps = self.class_head.captures(code)?;
        let keyword = match caps.get(1)?.as_str() {
            "struct" => ClassKeyword::Struct,
            _ => ClassKeyword::Class,
        };
        Some(ClassHead {
            keyword,
            name: caps.get(2)?.as_str().to_string(),
        })
    }

    /// Keyword of an access specifier line, if the line is one.
    #[must_use]
    pub fn access_specifier<'a>(&self, code: &'a str) -> Option<&'a str> {
        self.access_specifier
            .captures(code)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    #[must_use]
    pub fn is_template_header(&self, code: &str) -> bool {
        self.template_header.is_match(code)
    }

    /// Name of the declared variable if `code` is a member variable declaration.
    #[must_use]
    pub fn variable_name(&self, code: &str) -> Option<String> {
        if code.contains('(') || code.contains(')') || !code.contains(';') {
            return None;
        }
        let first_word = code
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or_default();
        if NON_DECLARATION_WORDS.contains(&first_word) {
            return None;
        }
        if code
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .any(|word| matches!(word, "return" | "if" | "for" | "while" | "throw"))
        {
            return None;
        }
        self.variable
            .captures(code)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Classify how a parenthesised line ends, or `None` if it is not a signature.
    #[must_use]
    pub fn signature_form(&self, code: &str) -> Option<SignatureForm> {
        if !has_balanced_parens(code) {
            return None;
        }
        if has_word(code, "virtual") || self.pure_virtual.is_match(code) {
            return Some(SignatureForm::Declaration);
        }
        if code.contains('{') {
            return Some(SignatureForm::Definition);
        }
        if code.trim_end().ends_with(';') {
            return Some(SignatureForm::Declaration);
        }
        if self.signature_tail.is_match(code.trim_end()) {
            return Some(SignatureForm::Dangling);
        }
        None
    }

    /// `= default` or `= delete`.
    #[must_use]
    pub fn is_defaulted_or_deleted(&self, code: &str) -> bool {
        self.defaulted.is_match(code)
    }

    /// Single-line body that only reads or writes a member.
    #[must_use]
    pub fn is_trivial_accessor(&self, code: &str) -> bool {
        self.trivial_getter.is_match(code) || self.trivial_setter.is_match(code)
    }
}

/// `class Foo;` without a body.
#[must_use]
pub fn is_forward_declaration(code: &str) -> bool {
    code.trim_end().ends_with(';') && !code.contains('{')
}

#[must_use]
pub fn has_word(code: &str, word: &str) -> bool {
    code.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|w| w == word)
}

fn has_balanced_parens(code: &str) -> bool {
    code.contains('(') && paren_balance(code) == 0
}

/// Net count of `(` minus `)`.
#[must_use]
pub fn paren_balance(code: &str) -> i32 {
    code.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

/// Net count of `{` minus `}`.
#[must_use]
pub fn brace_delta(code: &str) -> i32 {
    code.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Reduce a raw line to the code that matters for structure.
///
/// String and character literals are emptied, `//` comments dropped and
/// `/* ... */` spans removed. `in_block` carries an unterminated block comment
/// across lines.
#[must_use]
pub fn strip_code(line: &str, in_block: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if *in_block {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_block = false;
                out.push(' ');
            }
            continue;
        }
        match c {
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                *in_block = true;
            }
            '"' | '\'' => {
                out.push(c);
                skip_literal(&mut chars, c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}

fn skip_literal(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}

/// Name of the callable whose parameter list is the first `(` in `code`.
///
/// Returns the name (with a leading `~` for destructors) and the byte index of
/// the parameter list's opening parenthesis.
#[must_use]
pub fn callable_name(code: &str) -> Option<(String, usize)> {
    let open = code.find('(')?;
    let head = code[..open].trim_end();

    if head.ends_with("operator") && code[open..].starts_with("()") {
        let params_open = open + code[open + 2..].find('(')? + 2;
        return Some(("operator()".to_string(), params_open));
    }
    if let Some(pos) = head.rfind("operator") {
        let symbol = head[pos + "operator".len()..].trim();
        if !symbol.is_empty() && !symbol.chars().any(char::is_alphanumeric) {
            return Some((format!("operator{symbol}"), open));
        }
    }

    let ident_start = identifier_suffix_start(head)?;
    let ident = &head[ident_start..];
    if ident.starts_with(|c: char| c.is_ascii_digit()) || NON_METHOD_NAMES.contains(&ident) {
        return None;
    }
    let is_destructor = head[..ident_start].trim_end().ends_with('~');
    let name = if is_destructor {
        format!("~{ident}")
    } else {
        ident.to_string()
    };
    Some((name, open))
}

/// Text between the parenthesis at `open` and its matching `)`.
#[must_use]
pub fn parameter_list(code: &str, open: usize) -> Option<&str> {
    let mut depth = 0i32;
    for (idx, c) in code[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&code[open + 1..open + idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a parameter list on commas that are not nested in brackets.
#[must_use]
pub fn split_parameters(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (idx, c) in params.char_indices() {
        match c {
            '(' | '<' | '[' | '{' => depth += 1,
            ')' | '>' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(params[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    let last = params[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts.retain(|p| !p.is_empty());
    parts
}

/// Declared names of the parameters in a signature, skipping unnamed ones.
#[must_use]
pub fn parameter_names(signature: &str) -> Vec<String> {
    let Some((_, open)) = callable_name(signature) else {
        return Vec::new();
    };
    let Some(params) = parameter_list(signature, open) else {
        return Vec::new();
    };
    split_parameters(params)
        .into_iter()
        .filter_map(parameter_name)
        .collect()
}

/// Byte index where the identifier ending `text` starts, if `text` ends with one.
fn identifier_suffix_start(text: &str) -> Option<usize> {
    text.char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(idx, _)| idx)
}

fn parameter_name(param: &str) -> Option<String> {
    let declarator = param.split('=').next().unwrap_or(param).trim();
    let declarator = declarator.split('[').next().unwrap_or(declarator).trim_end();
    let ident_start = identifier_suffix_start(declarator).filter(|&start| start > 0)?;
    let ident = &declarator[ident_start..];
    let before = declarator[..ident_start].trim_end();
    if BUILTIN_TYPES.contains(&ident)
        || before.ends_with("::")
        || before.ends_with("const")
        || before.ends_with("struct")
        || before.ends_with("class")
    {
        return None;
    }
    Some(ident.to_string())
}

/// True if `param` has the shape `const C&`, `C const&` or `C&&` for class `class`.
#[must_use]
pub fn is_copy_or_move_parameter(param: &str, class: &str) -> bool {
    let compact: String = param
        .split('=')
        .next()
        .unwrap_or(param)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let compact = compact.replace(" &", "&");
    let (type_part, rest) = match compact.find('&') {
        Some(idx) => (compact[..idx].trim(), &compact[idx..]),
        None => return false,
    };
    let is_rvalue = rest.starts_with("&&");
    let after_refs = rest.trim_start_matches('&').trim();
    if !(after_refs.is_empty() || after_refs.chars().all(|c| c.is_alphanumeric() || c == '_')) {
        return false;
    }

    let words: Vec<&str> = type_part.split_whitespace().collect();
    match words.as_slice() {
        [name] => is_rvalue && *name == class,
        ["const", name] | [name, "const"] => !is_rvalue && *name == class,
        _ => false,
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
