use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::{VerboseError, context},
    sequence::pair,
};
use serde::{Deserialize, Serialize};

use super::{
    comment::parse_comment,
    keyword::Keyword,
    literal::{parse_literal, parse_template_literal, string_is_terminated},
    symbol::parse_symbol,
    whitespace::{parse_newline, parse_whitespace},
};
use crate::config::{TokenizerConfig, UnknownChars};

/// Lexical class of a [`Token`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Equals,
    Arrow,
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    Semicolon,
    Comma,
    LineComment,
    BlockComment,
    StringLiteral,
    NumberLiteral,
    Whitespace,
    Newline,
    /// A character no other scanner recognizes, kept for lossless output.
    Other,
    EndOfFile,
}

/// A classified, positioned slice of source text.
///
/// `line` and `column` are 1-based and describe the first character.
/// `offset` is the byte index of that character in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            offset,
        }
    }

    /// Byte offset one past the last byte of this token.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::lookup(&self.text),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Comments and strings: single tokens whose interior is never code.
    pub fn is_opaque(&self) -> bool {
        self.is_comment() || self.kind == TokenKind::StringLiteral
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }

    /// Tokens the pattern matcher never looks at: whitespace and unknown characters.
    pub fn is_insignificant(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Other)
    }

    /// Comments and newlines, which sit between the interesting tokens of a
    /// construct without changing it.
    pub fn is_trivia(&self) -> bool {
        self.is_comment() || self.is_newline() || self.is_insignificant()
    }

    /// True for a block comment missing its `*/` or a string missing its
    /// closing quote. Such tokens run to the end of the input.
    pub fn is_unterminated(&self) -> bool {
        match self.kind {
            TokenKind::BlockComment => self.text.len() < 4 || !self.text.ends_with("*/"),
            TokenKind::StringLiteral => !string_is_terminated(&self.text),
            _ => false,
        }
    }
}

/// The complete, ordered output of tokenizing one source text.
///
/// Always terminated by exactly one [`TokenKind::EndOfFile`] token with empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A stream is never empty: the end-of-file token is always present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn end_of_file(&self) -> Option<&Token> {
        self.tokens.last().filter(|t| t.kind == TokenKind::EndOfFile)
    }

    /// Concatenation of every token's text.
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Tokens reporting [`Token::is_unterminated`].
    pub fn unterminated(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_unterminated())
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Running cursor state of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    /// Moves past `text`, which was scanned as a token of `kind`.
    ///
    /// Line accounting differs per kind:
    /// * `Newline` starts a new line at column 1.
    /// * Newlines inside a block comment start a new line at column 0.
    /// * Newlines inside a string literal do not start a new line; every
    ///   character of a string counts as one column.
    pub fn advance(&mut self, kind: TokenKind, text: &str) {
        self.offset += text.len();
        match kind {
            TokenKind::Newline => {
                self.line += 1;
                self.column = 1;
            }
            TokenKind::BlockComment => {
                for c in text.chars() {
                    if c == '\n' {
                        self.line += 1;
                        self.column = 0;
                    } else {
                        self.column += 1;
                    }
                }
            }
            _ => self.column += text.chars().count(),
        }
    }
}

/// Converts source text into a [`TokenStream`].
///
/// The tokenizer never fails. Unterminated strings and comments run to the
/// end of the input; unrecognized characters are kept as
/// [`TokenKind::Other`] or dropped according to [`TokenizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
    position: Position,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        Self {
            config,
            position: Position::default(),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize(&mut self, input: &str) -> TokenStream {
        self.position = Position::default();
        let mut tokens = Vec::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start = self.position;
            match self.scan(remaining) {
                Some((rest, kind)) => {
                    let consumed = &remaining[..remaining.len() - rest.len()];
                    self.position.advance(kind, consumed);
                    tokens.push(Token::new(kind, consumed, start.line, start.column, start.offset));
                    remaining = rest;
                }
                None => {
                    // Every scanner rejected the input: step over one character.
                    let Some(c) = remaining.chars().next() else {
                        break;
                    };
                    let consumed = &remaining[..c.len_utf8()];
                    self.position.advance(TokenKind::Other, consumed);
                    match self.config.unknown_chars {
                        UnknownChars::Preserve => {
                            tracing::trace!(character = ?c, line = start.line, "preserving unknown character");
                            tokens.push(Token::new(
                                TokenKind::Other,
                                consumed,
                                start.line,
                                start.column,
                                start.offset,
                            ));
                        }
                        UnknownChars::Drop => {
                            tracing::trace!(character = ?c, line = start.line, "dropping unknown character");
                        }
                    }
                    remaining = &remaining[c.len_utf8()..];
                }
            }
        }

        tokens.push(Token::new(
            TokenKind::EndOfFile,
            "",
            self.position.line,
            self.position.column,
            self.position.offset,
        ));
        tracing::debug!(count = tokens.len(), "tokenized");
        TokenStream { tokens }
    }

    /// Runs the scanners in priority order and returns the first match.
    fn scan<'a>(&self, input: &'a str) -> Option<(&'a str, TokenKind)> {
        let literal: Scanner = if self.config.template_interpolation {
            parse_template_or_literal
        } else {
            parse_literal
        };
        let scanners: [Scanner; 6] = [
            parse_whitespace,
            parse_newline,
            parse_comment,
            literal,
            parse_identifier,
            parse_symbol,
        ];
        scanners.iter().find_map(|scanner| scanner(input).ok())
    }
}

fn parse_template_or_literal(input: &str) -> ParserResult<TokenKind> {
    parse_template_literal(input).or_else(|_| parse_literal(input))
}

/// Scans an identifier-shaped lexeme and classifies it as keyword or identifier.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_identifier(input: &str) -> ParserResult<TokenKind> {
    let (rest, word) = context(
        "identifier",
        recognize(pair(
            take_while1(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
            take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
        )),
    )(input)?;

    if Keyword::lookup(word).is_some() {
        return Ok((rest, TokenKind::Keyword));
    }
    Ok((rest, TokenKind::Identifier))
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

type Scanner = fn(&str) -> ParserResult<'_, TokenKind>;
