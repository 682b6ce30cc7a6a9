//! # jsig: JavaScript/TypeScript function signatures from a lossless token stream
//!
//! `jsig` finds function-like constructs in JavaScript and TypeScript
//! sources with enough positional fidelity that a caller can rewrite or
//! annotate the comments around them without corrupting strings, existing
//! comments or unrelated code. It builds no syntax tree and validates no
//! grammar.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code → Tokenizer → Preprocessor → Matcher → Function Signatures
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module turns source text into a [`TokenStream`]. The
//! stream is lossless: concatenating every token's text gives back the
//! source. Strings and comments are single opaque tokens.
//!
//! ### Stage 2: Preprocessing
//!
//! The [`preprocessor`] module removes whitespace (and unrecognized
//! characters) so the recognizers can rely on adjacent tokens.
//!
//! ### Stage 3: Matching
//!
//! The [`analyzer`] module walks the filtered tokens and emits a
//! [`FunctionSignature`] for every function declaration, async function,
//! arrow function binding and class method it recognizes.
//!
//! ## Configuration
//!
//! [`config::ScanConfig`] selects the tokenizer and matcher strategies. The
//! defaults use bounded lookahead windows and a coarse class context;
//! [`config::ScanConfig::structural`] tracks nesting depth and brace scopes
//! instead.
//!
//! ```rust
//! use jsig_core::config::ScanConfig;
//!
//! let source = "class A { run() {} }\nhelper();";
//! assert_eq!(jsig_core::scan(source, &ScanConfig::default()).len(), 2);
//! assert_eq!(jsig_core::scan(source, &ScanConfig::structural()).len(), 1);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod preprocessor;
pub mod tokenizer;

// Re-exports
pub use analyzer::{FunctionKind, FunctionSignature};
pub use error::*;
pub use tokenizer::token::{Token, TokenKind, TokenStream};

use analyzer::Matcher;
use config::{MatcherConfig, ScanConfig};
use preprocessor::{Preprocessor, TokenPreprocessor};
use tokenizer::token::Tokenizer;

/// Tokenizes `source` with the default tokenizer settings.
pub fn tokenize(source: &str) -> TokenStream {
    Tokenizer::new().tokenize(source)
}

/// Detects functions in `tokens` with the default matcher settings.
///
/// Whitespace and unknown-character tokens in `tokens` are ignored.
pub fn match_functions(tokens: &[Token]) -> Vec<FunctionSignature> {
    Matcher::new(MatcherConfig::default()).match_functions(tokens)
}

/// Tokenizes, filters and matches `source` in one call.
pub fn scan(source: &str, config: &ScanConfig) -> Vec<FunctionSignature> {
    let stream = Tokenizer::with_config(config.tokenizer.clone()).tokenize(source);
    let tokens = TokenPreprocessor::new().process(stream);
    Matcher::new(config.matcher.clone()).match_functions(&tokens)
}
