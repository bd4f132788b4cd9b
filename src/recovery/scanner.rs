use std::ops::ControlFlow;

use super::patterns::{
    ClassKeyword, Patterns, SignatureForm, brace_delta, callable_name, is_copy_or_move_parameter,
    paren_balance, parameter_list, split_parameters, strip_code,
};
use super::types::{AccessLevel, Entity, EntityKind, MethodInfo};

/// Longest multi-line signature that is joined into one logical line.
const MAX_SIGNATURE_LINES: usize = 32;

/// Scanner state. At most one class scope is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    OutsideClass,
    InClassBody(ClassScope),
    InFunctionBody { scope: ClassScope, depth: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassScope {
    name: String,
    depth: i32,
    /// The scope's own `{` has been seen (Allman heads open on a later line).
    opened: bool,
}

impl ClassScope {
    const fn is_closed(&self) -> bool {
        self.opened && self.depth <= 0
    }

    const fn apply(&mut self, delta: i32) {
        self.depth += delta;
        if delta > 0 {
            self.opened = true;
        }
    }
}

/// One-shot expectation that the next `{` opens a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingBody {
    None,
    Signature,
    Initializer,
}

/// Recovers classes, member variables and methods from header text.
///
/// This is a line scanner, not a parser: it tracks class scopes by brace
/// balance and suppresses everything inside inline method bodies.
#[derive(Default)]
pub struct EntityRecovery {
    patterns: Patterns,
}

impl EntityRecovery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover entities in file order. Lines are 1-based indices into `source`.
    #[must_use]
    pub fn recover(&self, source: &str) -> Vec<Entity> {
        let lines: Vec<&str> = source.split('\n').collect();
        let mut scan = Scan::new(&self.patterns, &lines);
        let mut index = 0;
        while index < lines.len() {
            index = scan.step(index);
        }
        tracing::debug!(entities = scan.entities.len(), "recovered entities");
        scan.entities
    }
}

struct Scan<'a> {
    patterns: &'a Patterns,
    lines: &'a [&'a str],
    state: ScanState,
    access: AccessLevel,
    in_block_comment: bool,
    in_directive: bool,
    pending_body: PendingBody,
    prev_code: String,
    template_line: Option<usize>,
    entities: Vec<Entity>,
}

impl<'a> Scan<'a> {
    fn new(patterns: &'a Patterns, lines: &'a [&'a str]) -> Self {
        Self {
            patterns,
            lines,
            state: ScanState::OutsideClass,
            access: AccessLevel::Private,
            in_block_comment: false,
            in_directive: false,
            pending_body: PendingBody::None,
            prev_code: String::new(),
            template_line: None,
            entities: Vec::new(),
        }
    }

    /// Process the line at `index` and return the index of the next unread line.
    fn step(&mut self, index: usize) -> usize {
        let raw = self.lines[index];
        let trimmed = raw.trim();
        if self.in_directive || (!self.in_block_comment && trimmed.starts_with('#')) {
            self.in_directive = trimmed.ends_with('\\');
            return index + 1;
        }
        if trimmed.is_empty() {
            return index + 1;
        }

        let code = strip_code(trimmed, &mut self.in_block_comment);
        if code.is_empty() {
            return index + 1;
        }

        let next = match std::mem::replace(&mut self.state, ScanState::OutsideClass) {
            ScanState::OutsideClass => {
                self.outside_class(index, &code);
                index + 1
            }
            ScanState::InClassBody(scope) => self.in_class_body(scope, index, code.clone()),
            ScanState::InFunctionBody { scope, depth } => {
                let depth = depth + brace_delta(&code);
                self.state = if depth <= 0 {
                    ScanState::InClassBody(scope)
                } else {
                    ScanState::InFunctionBody { scope, depth }
                };
                index + 1
            }
        };
        self.prev_code = code;
        next
    }

    fn outside_class(&mut self, index: usize, code: &str) {
        if self.patterns.is_template_header(code) {
            self.template_line = Some(index);
            return;
        }
        let Some(head) = self.patterns.class_head(code) else {
            self.template_line = None;
            return;
        };

        let line = self.take_template_line(index);
        self.emit(EntityKind::Class, line, head.name.clone(), None, AccessLevel::Public, None);

        let scope = ClassScope {
            name: head.name,
            depth: brace_delta(code),
            opened: code.contains('{'),
        };
        self.access = match head.keyword {
            ClassKeyword::Class => AccessLevel::Private,
            ClassKeyword::Struct => AccessLevel::Public,
        };

        if scope.is_closed() {
            self.inline_body(&scope.name, index, code);
            self.access = AccessLevel::Private;
        } else {
            self.state = ScanState::InClassBody(scope);
        }
    }

    /// Members of a class whose whole body sits on its head line.
    fn inline_body(&mut self, class: &str, index: usize, code: &str) {
        let (Some(open), Some(close)) = (code.find('{'), code.rfind('}')) else {
            return;
        };
        if close <= open {
            return;
        }
        for statement in code[open + 1..close].split(';') {
            let mut statement = statement.trim();
            if let Some(keyword) = self.patterns.access_specifier(statement)
                && let Some(access) = AccessLevel::from_keyword(keyword)
            {
                self.access = access;
                statement = statement[statement.find(':').map_or(0, |i| i + 1)..].trim();
            }
            if statement.is_empty() {
                continue;
            }
            let statement = format!("{statement};");
            if let Some(name) = self.patterns.variable_name(&statement) {
                self.emit_member(EntityKind::MemberVariable, index, name, class, None);
            } else if let Some(SignatureForm::Declaration) = self.patterns.signature_form(&statement)
            {
                self.method(class, index, &statement);
            }
        }
    }

    fn in_class_body(&mut self, scope: ClassScope, index: usize, code: String) -> usize {
        let scope = if self.pending_body == PendingBody::None {
            scope
        } else {
            match self.continue_pending_body(scope, index, &code) {
                ControlFlow::Break(next) => return next,
                ControlFlow::Continue(scope) => scope,
            }
        };

        let mut code = code;
        if let Some(keyword) = self.patterns.access_specifier(&code)
            && let Some(access) = AccessLevel::from_keyword(keyword)
        {
            self.access = access;
            let rest = code[code.find(':').map_or(code.len(), |i| i + 1)..].trim();
            if rest.is_empty() {
                self.state = ScanState::InClassBody(scope);
                return index + 1;
            }
            code = rest.to_string();
        }

        if self.patterns.is_template_header(&code) {
            self.template_line = Some(index);
            self.state = ScanState::InClassBody(scope);
            return index + 1;
        }

        if code.starts_with(':') && self.prev_code.ends_with(')') {
            self.open_body_or_close(scope, brace_delta(&code));
            return index + 1;
        }

        let (code, next) = self.join_signature(index, code);
        let delta = brace_delta(&code);

        if let Some(head) = self.patterns.class_head(&code) {
            let line = self.take_template_line(index);
            let access = self.access;
            self.emit(
                EntityKind::Class,
                line,
                head.name,
                Some(scope.name.clone()),
                access,
                None,
            );
            self.close_if_done(scope, delta);
            return next;
        }

        if let Some(name) = self.patterns.variable_name(&code) {
            let line = self.take_template_line(index);
            self.emit_member(EntityKind::MemberVariable, line, name, &scope.name, None);
            self.close_if_done(scope, delta);
            return next;
        }

        match self.patterns.signature_form(&code) {
            Some(form) => {
                self.method(&scope.name.clone(), index, &code);
                match form {
                    SignatureForm::Dangling => {
                        self.pending_body = PendingBody::Signature;
                        self.state = ScanState::InClassBody(scope);
                    }
                    SignatureForm::Definition | SignatureForm::Declaration => {
                        self.open_body_or_close(scope, delta);
                    }
                }
            }
            None => self.close_if_done(scope, delta),
        }
        self.template_line = None;
        next
    }

    /// Handle a line while a signature is waiting for its body.
    ///
    /// Hands the scope back when the line is unrelated and must be scanned normally.
    fn continue_pending_body(
        &mut self,
        scope: ClassScope,
        index: usize,
        code: &str,
    ) -> ControlFlow<usize, ClassScope> {
        let continues = code.starts_with('{')
            || code.starts_with(':')
            || self.pending_body == PendingBody::Initializer;
        if !continues {
            self.pending_body = PendingBody::None;
            return ControlFlow::Continue(scope);
        }

        if code.contains('{') {
            self.pending_body = PendingBody::None;
            self.open_body_or_close(scope, brace_delta(code));
        } else {
            self.pending_body = PendingBody::Initializer;
            self.state = ScanState::InClassBody(scope);
        }
        ControlFlow::Break(index + 1)
    }

    /// Join continuation lines while parentheses stay open.
    fn join_signature(&self, index: usize, code: String) -> (String, usize) {
        let mut joined = code;
        let mut next = index + 1;
        let mut in_block = false;
        while paren_balance(&joined) > 0
            && next < self.lines.len()
            && next - index < MAX_SIGNATURE_LINES
        {
            let continuation = strip_code(self.lines[next].trim(), &mut in_block);
            if !continuation.is_empty() {
                joined.push(' ');
                joined.push_str(&continuation);
            }
            next += 1;
        }
        (joined, next)
    }

    /// Enter a function body for a positive brace delta, else count it against the class.
    fn open_body_or_close(&mut self, scope: ClassScope, delta: i32) {
        if delta > 0 {
            self.state = ScanState::InFunctionBody {
                scope,
                depth: delta,
            };
        } else {
            self.close_if_done(scope, delta);
        }
    }

    fn close_if_done(&mut self, mut scope: ClassScope, delta: i32) {
        scope.apply(delta);
        if scope.is_closed() {
            self.access = AccessLevel::Private;
            self.pending_body = PendingBody::None;
            self.state = ScanState::OutsideClass;
        } else {
            self.state = ScanState::InClassBody(scope);
        }
    }

    /// Emit a method unless it belongs to an exempt shape.
    fn method(&mut self, class: &str, index: usize, code: &str) {
        let line = self.take_template_line(index);
        let Some((name, open)) = callable_name(code) else {
            return;
        };
        if is_macro_name(&name) || name.starts_with('~') {
            return;
        }
        if self.patterns.is_defaulted_or_deleted(code) || self.patterns.is_trivial_accessor(code)
        {
            return;
        }

        let params = parameter_list(code, open)
            .map(split_parameters)
            .unwrap_or_default();
        let is_constructor = name == class;
        if is_constructor && is_default_or_copy(&params, class) {
            return;
        }
        if name == "operator=" && params.len() == 1 && is_copy_or_move_parameter(params[0], class)
        {
            return;
        }

        let is_definition = self.patterns.signature_form(code) == Some(SignatureForm::Definition);
        let info = MethodInfo {
            is_constructor,
            is_definition,
            signature: code.to_string(),
        };
        self.emit_member(EntityKind::Method, line, name, class, Some(info));
    }

    fn emit_member(
        &mut self,
        kind: EntityKind,
        index: usize,
        name: String,
        class: &str,
        method: Option<MethodInfo>,
    ) {
        let access = self.access;
        self.emit(kind, index, name, Some(class.to_string()), access, method);
    }

    fn emit(
        &mut self,
        kind: EntityKind,
        index: usize,
        name: String,
        enclosing_class: Option<String>,
        access: AccessLevel,
        method: Option<MethodInfo>,
    ) {
        let id = self.entities.len();
        self.entities.push(Entity {
            id,
            kind,
            line: index + 1,
            name,
            enclosing_class,
            access,
            text: self.lines[index].to_string(),
            method,
        });
    }

    /// The declaration starts at a preceding `template <...>` line if there is one.
    fn take_template_line(&mut self, index: usize) -> usize {
        self.template_line.take().unwrap_or(index)
    }
}

fn is_default_or_copy(params: &[&str], class: &str) -> bool {
    match params {
        [] | ["void"] => true,
        [param] => is_copy_or_move_parameter(param, class),
        _ => false,
    }
}

/// `ALL_CAPS` identifiers are treated as macro invocations.
fn is_macro_name(name: &str) -> bool {
    name.len() > 1
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
