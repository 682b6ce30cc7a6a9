//! # Core Parser Definitions
//!
//! The parser interface and failure type that the pattern recognizers are
//! built on. A parser reads a slice of input items from a position and either
//! returns the position after what it consumed together with a value, or a
//! [`ParseError`]. For the recognizers a failure only means "no match here".

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// # Type Parameters
///
/// * `I` - The input item type (tokens for every recognizer in this crate)
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    ///
    /// * `Ok((new_pos, output))` - the position after the consumed items and the parsed value
    /// * `Err(error)` - nothing was matched at `pos`
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

impl<I, O> Parser<I, O> for Box<dyn Parser<I, O>> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.as_ref().parse(input, pos)
    }
}

/// On success, the new position and the parsed value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended before the parser could decide
    #[error("Unexpected EOF at position {position}, context: {context:?}")]
    UnexpectedEOF {
        position: usize,
        context: Option<String>,
    },
    /// The item at the position is not the expected one
    #[error("Unexpected: expected {expected}, found {found} at position {position}, context: {context:?}")]
    Unexpected {
        expected: String,
        found: String,
        position: usize,
        context: Option<String>,
    },
    /// No alternative matched
    #[error("No alternative matched at position {position}, context: {context:?}")]
    NoAlternative {
        position: usize,
        context: Option<String>,
    },
    /// Explicit failure
    #[error("Failure: {message} at position {position}, context: {context:?}")]
    Failure {
        message: String,
        position: usize,
        context: Option<String>,
    },
}

impl ParseError {
    pub fn eof(position: usize) -> Self {
        ParseError::UnexpectedEOF {
            position,
            context: None,
        }
    }

    pub fn failure(message: impl Into<String>, position: usize) -> Self {
        ParseError::Failure {
            message: message.into(),
            position,
            context: None,
        }
    }

    /// Prepends `ctx` to the context chain (`outer -> inner`).
    pub fn with_context(self, ctx: &str) -> Self {
        let chain = |context: Option<String>| {
            Some(match context {
                Some(inner) => format!("{} -> {}", ctx, inner),
                None => ctx.to_string(),
            })
        };
        match self {
            ParseError::UnexpectedEOF { position, context } => ParseError::UnexpectedEOF {
                position,
                context: chain(context),
            },
            ParseError::Unexpected {
                expected,
                found,
                position,
                context,
            } => ParseError::Unexpected {
                expected,
                found,
                position,
                context: chain(context),
            },
            ParseError::NoAlternative { position, context } => ParseError::NoAlternative {
                position,
                context: chain(context),
            },
            ParseError::Failure {
                message,
                position,
                context,
            } => ParseError::Failure {
                message,
                position,
                context: chain(context),
            },
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEOF { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
            ParseError::NoAlternative { position, .. } => *position,
            ParseError::Failure { position, .. } => *position,
        }
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedEOF { context, .. }
            | ParseError::Unexpected { context, .. }
            | ParseError::NoAlternative { context, .. }
            | ParseError::Failure { context, .. } => context.as_deref(),
        }
    }
}
