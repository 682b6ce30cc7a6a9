//! # Tokenizer Component
//!
//! Lexical analysis of JavaScript/TypeScript source text into a lossless,
//! positioned token stream.
//!
//! ## Design Principles
//!
//! * **Losslessness**: whitespace, newlines, comments and (by default)
//!   unrecognized characters are tokens, so concatenating every token's text
//!   reproduces the source.
//! * **Opaque strings and comments**: a string or comment is one token
//!   including its delimiters. Nothing inside it is ever seen as code.
//! * **Totality**: tokenizing never fails. Unterminated strings and block
//!   comments run to the end of input and can be detected afterwards with
//!   [`Token::is_unterminated`](token::Token::is_unterminated).
//!
//! ## Component Structure
//!
//! * [`token`]: token types, position tracking and the [`Tokenizer`](token::Tokenizer) driver
//! * [`keyword`]: the closed keyword set
//! * [`whitespace`]: whitespace and newline scanners
//! * [`comment`]: line and block comment scanners
//! * [`literal`]: string, template and number scanners
//! * [`symbol`]: punctuation scanners
//!
//! ## Usage Example
//!
//! ```rust
//! use jsig_core::tokenizer::token::{TokenKind, Tokenizer};
//!
//! let source = "const m = \"function fake() {}\"; // note";
//! let stream = Tokenizer::new().tokenize(source);
//! assert_eq!(stream.source_text(), source);
//! assert_eq!(stream.as_slice().last().unwrap().kind, TokenKind::EndOfFile);
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
