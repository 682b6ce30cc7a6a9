//! # Symbol Token Handling
//!
//! The punctuation the matcher cares about. `=>` is tried before `=` so the
//! arrow is never split. Every other punctuation character is left to the
//! tokenizer's unknown-character policy.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    error::context,
};

use super::token::{ParserResult, TokenKind};

/// Parses one of `=>`, `=`, `(`, `)`, `{`, `}`, `;`, `,`.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_symbol(input: &str) -> ParserResult<TokenKind> {
    context(
        "symbol",
        alt((
            value(TokenKind::Arrow, tag("=>")),
            value(TokenKind::Equals, char('=')),
            value(TokenKind::ParenOpen, char('(')),
            value(TokenKind::ParenClose, char(')')),
            value(TokenKind::BraceOpen, char('{')),
            value(TokenKind::BraceClose, char('}')),
            value(TokenKind::Semicolon, char(';')),
            value(TokenKind::Comma, char(',')),
        )),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arrow_before_equals() {
        assert_eq!(parse_symbol("=> x").unwrap(), (" x", TokenKind::Arrow));
        assert_eq!(parse_symbol("= x").unwrap(), (" x", TokenKind::Equals));
        // `==` is two equals tokens.
        assert_eq!(parse_symbol("==").unwrap(), ("=", TokenKind::Equals));
    }

    #[test]
    fn test_delimiters() {
        for (input, kind) in [
            ("(", TokenKind::ParenOpen),
            (")", TokenKind::ParenClose),
            ("{", TokenKind::BraceOpen),
            ("}", TokenKind::BraceClose),
            (";", TokenKind::Semicolon),
            (",", TokenKind::Comma),
        ] {
            assert_eq!(parse_symbol(input).unwrap(), ("", kind));
        }
    }

    #[test]
    fn test_unrecognized_punctuation() {
        for input in [".", "[", "+", "/", ">", "!", "@"] {
            assert!(parse_symbol(input).is_err(), "{input} should not be a symbol");
        }
    }
}
