//! Constructor functions for the combinators, plus single-token parsers
//! over [`Token`] slices.
//!
//! ```
//! use jsig_core::analyzer::prelude::*;
//! use jsig_core::analyzer::Parser;
//! use jsig_core::tokenizer::keyword::Keyword;
//! use jsig_core::tokenizer::token::TokenKind;
//!
//! let tokens = jsig_core::tokenize("function add(").into_tokens();
//! let tokens: Vec<_> = tokens.into_iter().filter(|t| !t.is_whitespace()).collect();
//!
//! let head = tuple3(keyword(Keyword::Function), identifier(), token_kind(TokenKind::ParenOpen));
//! let (next, (_, name, _)) = head.parse(&tokens, 0).unwrap();
//! assert_eq!(next, 3);
//! assert_eq!(name.text, "add");
//! ```

use super::combinators::*;
use super::core::Parser;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::{Token, TokenKind};

pub fn satisfy<I, O, F>(label: &'static str, f: F) -> Satisfy<I, O, F>
where
    I: std::fmt::Debug,
    F: Fn(&I) -> Option<O>,
{
    Satisfy::new(label, f)
}

pub fn choice<I, O>(parsers: Vec<Box<dyn Parser<I, O>>>) -> Choice<I, O> {
    Choice::new(parsers)
}

pub fn tuple2<I, O1, O2, P1, P2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    Tuple2::new(parser1, parser2)
}

pub fn tuple3<I, O1, O2, O3, P1, P2, P3>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
) -> Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    Tuple3::new(parser1, parser2, parser3)
}

pub fn tuple4<I, O1, O2, O3, O4, P1, P2, P3, P4>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
) -> Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
    P4: Parser<I, O4>,
{
    Tuple4::new(parser1, parser2, parser3, parser4)
}

pub fn with_context<I, O, P>(parser: P, context: &'static str) -> WithContext<P>
where
    P: Parser<I, O>,
{
    WithContext::new(parser, context)
}

/// Any token of `kind`.
pub fn token_kind(kind: TokenKind) -> impl Parser<Token, Token> {
    satisfy("token kind", move |t: &Token| {
        (t.kind == kind).then(|| t.clone())
    })
}

pub fn keyword(keyword: Keyword) -> impl Parser<Token, Token> {
    satisfy("keyword", move |t: &Token| t.is_keyword(keyword).then(|| t.clone()))
}

pub fn identifier() -> impl Parser<Token, Token> {
    token_kind(TokenKind::Identifier)
}

/// `const`, `let` or `var`.
pub fn binding_keyword() -> impl Parser<Token, Token> {
    satisfy("binding keyword", |t: &Token| {
        t.keyword()
            .is_some_and(Keyword::is_binding)
            .then(|| t.clone())
    })
}

/// An identifier, or `constructor` when `allow_constructor` is set.
pub fn method_name(allow_constructor: bool) -> impl Parser<Token, Token> {
    satisfy("method name", move |t: &Token| {
        let accepted = t.kind == TokenKind::Identifier
            || (allow_constructor && t.is_keyword(Keyword::Constructor));
        accepted.then(|| t.clone())
    })
}
