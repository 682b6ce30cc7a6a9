//! # Token Preprocessor
//!
//! Sits between the tokenizer and the pattern matcher:
//!
//! ```text
//! Source Code → Tokenizer → Preprocessor → Pattern Matcher → Function Signatures
//! ```
//!
//! [`TokenPreprocessor`] removes the tokens that never take part in a
//! function pattern: whitespace and unrecognized characters. Newlines,
//! comments and strings stay, so the matcher still sees (and steps over)
//! them. Because unknown characters are removed here, the matcher observes
//! the same stream whether the tokenizer preserved or dropped them.

use crate::tokenizer::token::{Token, TokenStream};

/// A trait for preprocessing different types of input
pub trait Preprocessor<T, U = T> {
    /// Process the input of type T and return the processed result
    fn process(&self, input: T) -> U;
}

/// Filters a token stream down to the tokens the matcher inspects.
#[derive(Debug, Clone, Default)]
pub struct TokenPreprocessor {}

impl TokenPreprocessor {
    pub fn new() -> Self {
        Self {}
    }

    fn keep(token: &Token) -> bool {
        !token.is_insignificant()
    }
}

impl Preprocessor<TokenStream, Vec<Token>> for TokenPreprocessor {
    fn process(&self, input: TokenStream) -> Vec<Token> {
        input.into_iter().filter(Self::keep).collect()
    }
}

impl Preprocessor<&TokenStream, Vec<Token>> for TokenPreprocessor {
    fn process(&self, input: &TokenStream) -> Vec<Token> {
        input.iter().filter(|t| Self::keep(t)).cloned().collect()
    }
}

impl Preprocessor<Vec<Token>> for TokenPreprocessor {
    fn process(&self, input: Vec<Token>) -> Vec<Token> {
        input.into_iter().filter(Self::keep).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TokenizerConfig, UnknownChars};
    use crate::tokenizer::token::{TokenKind, Tokenizer};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_removes_whitespace_and_other() {
        let stream = Tokenizer::new().tokenize("a . b\n// c\n'd'");
        let kinds: Vec<_> = TokenPreprocessor::new()
            .process(stream)
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::LineComment,
                TokenKind::Newline,
                TokenKind::StringLiteral,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_same_result_for_preserved_and_dropped_characters() {
        let source = "const f = (a, b) => a + b * [1, 2].length;";
        let preserved = Tokenizer::new().tokenize(source);
        let dropped = Tokenizer::with_config(TokenizerConfig {
            unknown_chars: UnknownChars::Drop,
            ..TokenizerConfig::default()
        })
        .tokenize(source);

        let preprocessor = TokenPreprocessor::default();
        assert_eq!(
            preprocessor.process(&preserved),
            preprocessor.process(&dropped)
        );
    }

    #[test]
    fn test_keeps_positions() {
        let stream = Tokenizer::new().tokenize("  x");
        let tokens = TokenPreprocessor::new().process(stream);
        assert_eq!(tokens[0].text, "x");
        assert_eq!(tokens[0].column, 3);
        assert_eq!(tokens[0].offset, 2);
    }
}
