//! Brace-delimited scope tracking.
//!
//! The matcher feeds every token it passes over to a [`ScopeStack`]. A `{`
//! pushes a scope tagged with whatever introduced it: a `class` keyword, a
//! matched function head, or nothing (a plain block). `}` pops it.

use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScopeKind {
    Class,
    Function,
    Block,
}

#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<ScopeKind>,
    /// Kind of the scope the next `{` opens.
    pending: Option<ScopeKind>,
    class_seen: bool,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, token: &Token) {
        match token.kind {
            TokenKind::Keyword if token.is_keyword(Keyword::Class) => {
                self.pending = Some(ScopeKind::Class);
                self.class_seen = true;
            }
            TokenKind::BraceOpen => {
                let kind = self.pending.take().unwrap_or(ScopeKind::Block);
                tracing::trace!(%kind, depth = self.scopes.len() + 1, "enter scope");
                self.scopes.push(kind);
            }
            TokenKind::BraceClose => {
                // Stray closing braces leave the stack empty rather than failing.
                if let Some(kind) = self.scopes.pop() {
                    tracing::trace!(%kind, depth = self.scopes.len(), "leave scope");
                }
            }
            TokenKind::Semicolon => self.pending = None,
            _ => {}
        }
    }

    /// The next `{` opens a function body.
    pub fn expect_function_body(&mut self) {
        self.pending = Some(ScopeKind::Function);
    }

    pub fn innermost(&self) -> Option<ScopeKind> {
        self.scopes.last().copied()
    }

    pub fn in_class_body(&self) -> bool {
        self.innermost() == Some(ScopeKind::Class)
    }

    /// A `class` keyword has been observed at any point.
    pub fn class_seen(&self) -> bool {
        self.class_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn observe_all(stack: &mut ScopeStack, source: &str) {
        for token in crate::tokenize(source).iter() {
            stack.observe(token);
        }
    }

    #[test]
    fn test_class_body() {
        let mut stack = ScopeStack::new();
        observe_all(&mut stack, "class A extends B {");
        assert!(stack.in_class_body());
        assert!(stack.class_seen());

        observe_all(&mut stack, "}");
        assert_eq!(stack.innermost(), None);
        assert!(stack.class_seen());
    }

    #[test]
    fn test_nested_blocks() {
        let mut stack = ScopeStack::new();
        observe_all(&mut stack, "class A { m() ");
        stack.expect_function_body();
        observe_all(&mut stack, "{ if (x) {");
        assert_eq!(stack.innermost(), Some(ScopeKind::Block));
        observe_all(&mut stack, "}");
        assert_eq!(stack.innermost(), Some(ScopeKind::Function));
        observe_all(&mut stack, "}");
        assert!(stack.in_class_body());
    }

    #[test]
    fn test_semicolon_clears_pending() {
        let mut stack = ScopeStack::new();
        stack.expect_function_body();
        observe_all(&mut stack, "; {");
        assert_eq!(stack.innermost(), Some(ScopeKind::Block));
    }

    #[test]
    fn test_unbalanced_close() {
        let mut stack = ScopeStack::new();
        observe_all(&mut stack, "} } {");
        assert_eq!(stack.innermost(), Some(ScopeKind::Block));
        observe_all(&mut stack, "}");
        assert_eq!(stack.innermost(), None);
    }
}
