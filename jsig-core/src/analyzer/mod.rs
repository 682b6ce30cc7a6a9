//! # Function Pattern Analyzer
//!
//! Detects function-like constructs in a token stream using a parser
//! combinator design. No syntax tree is built: each recognizer looks for a
//! short, fixed token shape at the cursor and reads parameter names from
//! what follows.
//!
//! ## Components
//!
//! * **Parser Trait** ([`core`]): the parsing contract and [`ParseError`]
//! * **Combinators** ([`combinators`], [`prelude`]): composable building blocks
//! * **Recognizers** ([`patterns`]): declaration, async function, arrow function, class method
//! * **Strategies** ([`parameters`], [`lookahead`], [`scope`]): parameter
//!   extraction, arrow search and class context, each selectable through
//!   [`MatcherConfig`](crate::config::MatcherConfig)
//! * **Driver** ([`matcher`]): the cursor loop producing [`FunctionSignature`]s
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Source Code → Tokenizer → Preprocessor → Matcher → Function Signatures
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use jsig_core::analyzer::{FunctionKind, Matcher};
//! use jsig_core::preprocessor::{Preprocessor, TokenPreprocessor};
//!
//! let tokens = TokenPreprocessor::new().process(jsig_core::tokenize("function add(a, b) {}"));
//! let signatures = Matcher::default().match_functions(&tokens);
//! assert_eq!(signatures[0].kind, FunctionKind::Declaration);
//! assert_eq!(signatures[0].parameters, vec!["a", "b"]);
//! ```

pub mod combinators;
pub mod core;
pub mod lookahead;
pub mod matcher;
pub mod parameters;
pub mod patterns;
pub mod prelude;
pub mod scope;
pub mod signature;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;

pub use matcher::Matcher;
pub use signature::{FunctionKind, FunctionSignature};
