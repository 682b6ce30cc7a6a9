//! # Function Pattern Recognizers
//!
//! One parser per recognized shape. Each expects its trigger tokens at
//! consecutive positions starting at the cursor (no skipping between them)
//! and, on success, returns the position after the consumed tokens and the
//! signature.
//!
//! | Recognizer | Trigger | Consumes through |
//! |---|---|---|
//! | [`FunctionDeclaration`] | `function` Identifier `(` | the parameter list |
//! | [`AsyncFunction`] | `async` `function` Identifier `(` | the parameter list |
//! | [`ArrowFunction`] | `const`/`let`/`var` Identifier `=` ... `=>` | the `=>` |
//! | [`ClassMethod`] | Identifier `(` | the parameter list |
//!
//! Whether a class method is allowed at the cursor depends on scope and is
//! decided by the matcher.

use super::core::{ParseError, ParseResult, Parser};
use super::lookahead::{find_arrow, is_async_arrow};
use super::parameters::{ParameterList, arrow_parameters};
use super::prelude::*;
use super::signature::{FunctionKind, FunctionSignature};
use crate::config::{Lookahead, ParameterScan};
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy)]
pub struct FunctionDeclaration {
    parameters: ParameterScan,
}

impl FunctionDeclaration {
    pub fn new(parameters: ParameterScan) -> Self {
        Self { parameters }
    }
}

impl Parser<Token, FunctionSignature> for FunctionDeclaration {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<FunctionSignature> {
        let head = with_context(
            tuple4(
                keyword(Keyword::Function),
                identifier(),
                token_kind(TokenKind::ParenOpen),
                ParameterList::new(self.parameters),
            ),
            "function declaration",
        );
        let (next, (leading, name, _, parameters)) = head.parse(input, pos)?;
        let signature = FunctionSignature::new(
            FunctionKind::Declaration,
            &leading,
            name.text,
            parameters,
            false,
        );
        Ok((next, signature))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AsyncFunction {
    parameters: ParameterScan,
}

impl AsyncFunction {
    pub fn new(parameters: ParameterScan) -> Self {
        Self { parameters }
    }
}

impl Parser<Token, FunctionSignature> for AsyncFunction {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<FunctionSignature> {
        let head = with_context(
            tuple2(
                keyword(Keyword::Async),
                tuple4(
                    keyword(Keyword::Function),
                    identifier(),
                    token_kind(TokenKind::ParenOpen),
                    ParameterList::new(self.parameters),
                ),
            ),
            "async function",
        );
        let (next, (leading, (_, name, _, parameters))) = head.parse(input, pos)?;
        let signature = FunctionSignature::new(
            FunctionKind::AsyncFunction,
            &leading,
            name.text,
            parameters,
            true,
        );
        Ok((next, signature))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArrowFunction {
    lookahead: Lookahead,
    parameters: ParameterScan,
}

impl ArrowFunction {
    pub fn new(lookahead: Lookahead, parameters: ParameterScan) -> Self {
        Self {
            lookahead,
            parameters,
        }
    }
}

impl Parser<Token, FunctionSignature> for ArrowFunction {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<FunctionSignature> {
        let head = with_context(
            tuple3(binding_keyword(), identifier(), token_kind(TokenKind::Equals)),
            "arrow function",
        );
        let (value, (leading, name, _)) = head.parse(input, pos)?;
        let equals = value - 1;

        let arrow = find_arrow(input, equals, self.lookahead).ok_or_else(|| {
            ParseError::failure("no `=>` for binding", value).with_context("arrow function")
        })?;
        let is_async = is_async_arrow(input, pos, equals, arrow, self.lookahead);
        let parameters = arrow_parameters(input, equals, arrow, self.parameters);

        let signature = FunctionSignature::new(
            FunctionKind::Arrow,
            &leading,
            name.text,
            parameters,
            is_async,
        );
        Ok((arrow + 1, signature))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClassMethod {
    parameters: ParameterScan,
    allow_constructor: bool,
}

impl ClassMethod {
    pub fn new(parameters: ParameterScan, allow_constructor: bool) -> Self {
        Self {
            parameters,
            allow_constructor,
        }
    }
}

impl Parser<Token, FunctionSignature> for ClassMethod {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<FunctionSignature> {
        let head = with_context(
            tuple3(
                method_name(self.allow_constructor),
                token_kind(TokenKind::ParenOpen),
                ParameterList::new(self.parameters),
            ),
            "class method",
        );
        let (next, (name, _, parameters)) = head.parse(input, pos)?;
        let is_async = pos
            .checked_sub(1)
            .and_then(|i| input.get(i))
            .is_some_and(|t| t.is_keyword(Keyword::Async));

        let signature = FunctionSignature::new(
            FunctionKind::ClassMethod,
            &name,
            name.text.clone(),
            parameters,
            is_async,
        );
        Ok((next, signature))
    }
}
