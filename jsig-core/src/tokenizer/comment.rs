//! # Comment Token Handling
//!
//! Comments are kept as single opaque tokens including their delimiters, so
//! nothing inside a comment can ever be classified as code.
//!
//! * **Line comments**: `//` through, but not including, the next `\n`
//!   (or the end of input).
//! * **Block comments**: `/*` through the first `*/`. Block comments do not
//!   nest. An unterminated block comment absorbs the rest of the input.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until},
    combinator::{recognize, rest, value},
    error::context,
    sequence::{pair, preceded},
};

use super::token::{ParserResult, TokenKind};

/// Parses a line comment.
///
/// ```
/// # use jsig_core::tokenizer::comment::parse_line_comment;
/// # use jsig_core::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_line_comment("// note\ncode").unwrap();
/// assert_eq!(kind, TokenKind::LineComment);
/// assert_eq!(rest, "\ncode");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "line comment",
        value(
            TokenKind::LineComment,
            preceded(tag("//"), take_till(|c: char| c == '\n')),
        ),
    )(input)
}

/// Parses a block comment, tolerating a missing terminator.
///
/// ```
/// # use jsig_core::tokenizer::comment::parse_block_comment;
/// # use jsig_core::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_block_comment("/* a\n b */code").unwrap();
/// assert_eq!(kind, TokenKind::BlockComment);
/// assert_eq!(rest, "code");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_block_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "block comment",
        value(
            TokenKind::BlockComment,
            preceded(
                tag("/*"),
                alt((recognize(pair(take_until("*/"), tag("*/"))), rest)),
            ),
        ),
    )(input)
}

/// Parses either kind of comment.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<TokenKind> {
    context("comment", alt((parse_line_comment, parse_block_comment)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_comment() {
        let (rest, kind) = parse_comment("// function fake() {}\nnext").unwrap();
        assert_eq!(kind, TokenKind::LineComment);
        assert_eq!(rest, "\nnext");
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let (rest, kind) = parse_comment("// trailing").unwrap();
        assert_eq!(kind, TokenKind::LineComment);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_block_comment() {
        let (rest, kind) = parse_comment("/* a\n * b\n */code").unwrap();
        assert_eq!(kind, TokenKind::BlockComment);
        assert_eq!(rest, "code");
    }

    #[test]
    fn test_nested_looking_comment() {
        let (rest, kind) = parse_comment("/* outer /* not nested */ */").unwrap();
        assert_eq!(kind, TokenKind::BlockComment);
        assert_eq!(rest, " */");
    }

    #[test]
    fn test_unterminated_block_comment_absorbs_rest() {
        let (rest, kind) = parse_comment("/* open\nfunction f() {}").unwrap();
        assert_eq!(kind, TokenKind::BlockComment);
        assert_eq!(rest, "");

        let (rest, _) = parse_comment("/*/ x").unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn test_not_a_comment() {
        assert!(parse_comment("/ 2").is_err());
        assert!(parse_comment("x // y").is_err());
    }
}
