//! # Whitespace Token Handling
//!
//! Whitespace is preserved as tokens so that the concatenation of a token
//! stream reproduces its source exactly.
//!
//! * [`TokenKind::Whitespace`]: runs of spaces, tabs and carriage returns. A
//!   run never crosses a line feed.
//! * [`TokenKind::Newline`]: a single `\n`. A `\r\n` pair is therefore a
//!   whitespace token followed by a newline token.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::value,
    error::context,
};

use super::token::{ParserResult, TokenKind};

/// Parses a run of spaces, tabs and carriage returns.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<TokenKind> {
    context(
        "whitespace",
        value(
            TokenKind::Whitespace,
            take_while1(|c: char| c == ' ' || c == '\t' || c == '\r'),
        ),
    )(input)
}

/// Parses one line feed.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_newline(input: &str) -> ParserResult<TokenKind> {
    context("newline", value(TokenKind::Newline, char('\n')))(input)
}
