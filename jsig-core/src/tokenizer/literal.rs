//! # Literal Token Handling
//!
//! String and number literals.
//!
//! ## Strings
//!
//! A string opens with `"`, `'` or `` ` `` and runs to the matching quote.
//! A backslash always consumes itself and the next character, whatever that
//! character is. The token keeps both quotes. A string without its closing
//! quote runs to the end of the input.
//!
//! [`parse_template_literal`] is the interpolation-aware variant for
//! backtick strings: quotes, backticks and braces inside `${ ... }` are
//! balanced instead of ending the template.
//!
//! ## Numbers
//!
//! Digits, then optionally one `.` and further digits. Signs, exponents,
//! separators and radix prefixes are not part of the number token.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{opt, recognize, value},
    error::{ErrorKind, ParseError, VerboseError, context},
    sequence::pair,
};

use super::token::{ParserResult, TokenKind};

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Scans a quoted string starting at `input[0]`.
///
/// Returns the byte length consumed and whether the closing quote was found.
fn scan_quoted(input: &str) -> Option<(usize, bool)> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, c)) if is_quote(c) => c,
        _ => return None,
    };
    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((idx + c.len_utf8(), true));
        }
    }
    Some((input.len(), false))
}

/// What a template scan is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    /// A backtick template body.
    Template,
    /// A `${ ... }` interpolation with this many unclosed inner `{`.
    Interpolation(usize),
}

/// Scans a backtick template starting at `input[0]`, balancing `${ ... }`.
///
/// Nested templates and interpolations are tracked on an explicit stack, so
/// arbitrarily deep nesting costs heap, not call depth.
fn scan_template(input: &str) -> Option<(usize, bool)> {
    if !input.starts_with('`') {
        return None;
    }
    let mut stack = vec![Open::Template];
    let mut idx = 1;
    while let Some(c) = input[idx..].chars().next() {
        let Some(&state) = stack.last() else {
            break;
        };
        match (state, c) {
            (Open::Template, '\\') => {
                idx += 1;
                if let Some(next) = input[idx..].chars().next() {
                    idx += next.len_utf8();
                }
            }
            (Open::Template, '`') => {
                stack.pop();
                idx += 1;
                if stack.is_empty() {
                    return Some((idx, true));
                }
            }
            (Open::Template, '$') if input[idx + 1..].starts_with('{') => {
                stack.push(Open::Interpolation(0));
                idx += 2;
            }
            (Open::Interpolation(depth), '{') => {
                stack.pop();
                stack.push(Open::Interpolation(depth + 1));
                idx += 1;
            }
            (Open::Interpolation(0), '}') => {
                stack.pop();
                idx += 1;
            }
            (Open::Interpolation(depth), '}') => {
                stack.pop();
                stack.push(Open::Interpolation(depth - 1));
                idx += 1;
            }
            (Open::Interpolation(_), '`') => {
                stack.push(Open::Template);
                idx += 1;
            }
            (Open::Interpolation(_), '"' | '\'') => {
                let (len, closed) = scan_quoted(&input[idx..])?;
                if !closed {
                    return Some((input.len(), false));
                }
                idx += len;
            }
            _ => idx += c.len_utf8(),
        }
    }
    Some((input.len(), false))
}

fn quoted_with(
    input: &str,
    scan: fn(&str) -> Option<(usize, bool)>,
) -> ParserResult<'_, TokenKind> {
    match scan(input) {
        Some((len, _)) => Ok((&input[len..], TokenKind::StringLiteral)),
        None => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Char,
        ))),
    }
}

fn quoted_string(input: &str) -> ParserResult<TokenKind> {
    quoted_with(input, scan_quoted)
}

fn template_string(input: &str) -> ParserResult<TokenKind> {
    quoted_with(input, scan_template)
}

/// Parses a string literal delimited by `"`, `'` or `` ` ``.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_string_literal(input: &str) -> ParserResult<TokenKind> {
    context("string literal", quoted_string)(input)
}

/// Parses a backtick template literal with balanced interpolations.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_template_literal(input: &str) -> ParserResult<TokenKind> {
    context("template literal", template_string)(input)
}

/// Parses a decimal number literal with at most one decimal point.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "number literal",
        value(
            TokenKind::NumberLiteral,
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        ),
    )(input)
}

/// Parses a string or number literal.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "literal",
        alt((parse_string_literal, parse_number_literal)),
    )(input)
}

/// True when `text` is a complete quoted string: it opens with a quote and
/// the matching unescaped quote is its last character.
pub fn string_is_terminated(text: &str) -> bool {
    let scanned = if text.starts_with('`') {
        scan_template(text).filter(|(_, closed)| *closed)
    } else {
        None
    }
    .or_else(|| scan_quoted(text));
    matches!(scanned, Some((len, true)) if len == text.len())
}
