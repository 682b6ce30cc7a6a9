//! Parameter name extraction.
//!
//! Both strategies are best-effort and never fail:
//!
//! * [`ParameterScan::Flat`] collects every identifier up to the first `)`.
//!   Nested parentheses are not balanced, so a default value containing a
//!   call ends the list early.
//! * [`ParameterScan::DepthCounted`] tracks `(`/`{` nesting and splits on
//!   top-level commas. Each segment contributes its first top-level
//!   identifier; a segment opening with `{` is a destructuring pattern and
//!   contributes nothing.

use super::core::{ParseResult, Parser};
use crate::config::ParameterScan;
use crate::tokenizer::keyword::{Keyword, is_keyword};
use crate::tokenizer::token::{Token, TokenKind};

/// Reads a parameter list starting just after its `(`.
///
/// The returned position is past the closing `)` when one was found.
#[derive(Debug, Clone, Copy)]
pub struct ParameterList {
    scan: ParameterScan,
}

impl ParameterList {
    pub fn new(scan: ParameterScan) -> Self {
        Self { scan }
    }
}

impl Parser<Token, Vec<String>> for ParameterList {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<Vec<String>> {
        Ok(match self.scan {
            ParameterScan::Flat => flat(input, pos),
            ParameterScan::DepthCounted => depth_counted(input, pos),
        })
    }
}

fn flat(input: &[Token], start: usize) -> (usize, Vec<String>) {
    let mut names = Vec::new();
    let mut pos = start;
    while let Some(token) = input.get(pos) {
        match token.kind {
            TokenKind::ParenClose => return (pos + 1, names),
            TokenKind::EndOfFile => break,
            TokenKind::Identifier => names.push(token.text.clone()),
            _ => {}
        }
        pos += 1;
    }
    (pos, names)
}

#[derive(Default)]
struct Segment {
    name: Option<String>,
    destructured: bool,
}

impl Segment {
    fn finish(self, names: &mut Vec<String>) {
        if let Some(name) = self.name {
            names.push(name);
        }
    }
}

fn depth_counted(input: &[Token], start: usize) -> (usize, Vec<String>) {
    let mut names = Vec::new();
    let mut segment = Segment::default();
    let mut depth = 0usize;
    let mut pos = start;

    while let Some(token) = input.get(pos) {
        match token.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::BraceOpen => {
                if depth == 0 && segment.name.is_none() {
                    segment.destructured = true;
                }
                depth += 1;
            }
            TokenKind::ParenClose if depth == 0 => {
                segment.finish(&mut names);
                return (pos + 1, names);
            }
            // An unmatched `}` means the list was never closed.
            TokenKind::BraceClose if depth == 0 => break,
            TokenKind::ParenClose | TokenKind::BraceClose => depth -= 1,
            TokenKind::Comma if depth == 0 => {
                std::mem::take(&mut segment).finish(&mut names);
            }
            TokenKind::Identifier
                if depth == 0 && segment.name.is_none() && !segment.destructured =>
            {
                segment.name = Some(token.text.clone());
            }
            TokenKind::EndOfFile => break,
            _ => {}
        }
        pos += 1;
    }

    segment.finish(&mut names);
    (pos, names)
}

/// Parameter names of an arrow function whose `=` is at `equals` and whose
/// `=>` is at `arrow`.
pub fn arrow_parameters(
    input: &[Token],
    equals: usize,
    arrow: usize,
    scan: ParameterScan,
) -> Vec<String> {
    let region = input.get(equals + 1..arrow).unwrap_or_default();
    match scan {
        ParameterScan::Flat => region
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier && !is_keyword(&t.text))
            .map(|t| t.text.clone())
            .collect(),
        ParameterScan::DepthCounted => {
            let skip = region
                .iter()
                .take_while(|t| t.is_trivia() || t.is_keyword(Keyword::Async))
                .count();
            let first = equals + 1 + skip;
            match region.get(skip).map(|t| t.kind) {
                Some(TokenKind::ParenOpen) => depth_counted(&input[..arrow], first + 1).1,
                Some(TokenKind::Identifier) => vec![input[first].text.clone()],
                _ => Vec::new(),
            }
        }
    }
}
