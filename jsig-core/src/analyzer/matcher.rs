//! The matcher driver: walks a whitespace-free token slice with a cursor
//! and runs the recognizers at every position.

use std::borrow::Cow;

use super::combinators::Choice;
use super::core::Parser;
use super::patterns::{ArrowFunction, AsyncFunction, ClassMethod, FunctionDeclaration};
use super::prelude::choice;
use super::scope::ScopeStack;
use super::signature::FunctionSignature;
use crate::config::{ClassScope, MatcherConfig};
use crate::preprocessor::{Preprocessor, TokenPreprocessor};
use crate::tokenizer::token::Token;

/// Detects function-like constructs in a token slice.
///
/// At each cursor position the recognizers are tried in priority order:
/// function declaration, async function, arrow function, class method. The
/// first match emits a signature and moves the cursor past its tokens;
/// otherwise the cursor advances by one token. Comment and string tokens
/// are stepped over without trying any recognizer.
///
/// Whitespace and unknown-character tokens are filtered out before matching
/// (see [`TokenPreprocessor`]), so windows and adjacency checks count the
/// same tokens however the caller prepared the slice.
pub struct Matcher {
    config: MatcherConfig,
    recognizers: Choice<Token, FunctionSignature>,
    class_method: ClassMethod,
    scope: ScopeStack,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        let recognizers: Vec<Box<dyn Parser<Token, FunctionSignature>>> = vec![
            Box::new(FunctionDeclaration::new(config.parameters)),
            Box::new(AsyncFunction::new(config.parameters)),
            Box::new(ArrowFunction::new(config.lookahead, config.parameters)),
        ];
        let class_method = ClassMethod::new(
            config.parameters,
            config.class_scope == ClassScope::Enclosing,
        );
        Self {
            config,
            recognizers: choice(recognizers),
            class_method,
            scope: ScopeStack::new(),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip(self, tokens), fields(len = tokens.len()))]
    pub fn match_functions(&mut self, tokens: &[Token]) -> Vec<FunctionSignature> {
        self.scope = ScopeStack::new();
        let tokens: Cow<[Token]> = if tokens.iter().any(Token::is_insignificant) {
            Cow::Owned(TokenPreprocessor::new().process(tokens.to_vec()))
        } else {
            Cow::Borrowed(tokens)
        };
        let tokens = tokens.as_ref();
        let mut signatures = Vec::new();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = &tokens[cursor];
            if token.is_opaque() {
                tracing::trace!(kind = %token.kind, line = token.line, "stepping over opaque token");
                cursor += 1;
                continue;
            }

            match self.recognize(tokens, cursor) {
                Some((next, signature)) => {
                    tracing::debug!(
                        kind = %signature.kind,
                        name = %signature.name,
                        line = signature.line,
                        column = signature.column,
                        "matched function"
                    );
                    for consumed in &tokens[cursor..next] {
                        self.scope.observe(consumed);
                    }
                    self.scope.expect_function_body();
                    signatures.push(signature);
                    cursor = next;
                }
                None => {
                    tracing::trace!(kind = %token.kind, text = %token.text, "no pattern");
                    self.scope.observe(token);
                    cursor += 1;
                }
            }
        }

        tracing::debug!(count = signatures.len(), "matching finished");
        signatures
    }

    fn recognize(&self, tokens: &[Token], cursor: usize) -> Option<(usize, FunctionSignature)> {
        if let Ok(matched) = self.recognizers.parse(tokens, cursor) {
            return Some(matched);
        }
        if self.in_class_context() {
            return self.class_method.parse(tokens, cursor).ok();
        }
        None
    }

    fn in_class_context(&self) -> bool {
        match self.config.class_scope {
            ClassScope::Anywhere => self.scope.class_seen(),
            ClassScope::Enclosing => self.scope.in_class_body(),
        }
    }
}
