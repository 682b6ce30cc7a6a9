//! # Parser Combinators
//!
//! Small parsers and the combinators that compose them into the function
//! pattern recognizers.
//!
//! * **Basic**: [`Satisfy`] consumes one item that passes a predicate
//! * **Alternative**: [`Choice`] returns the first parser that succeeds
//! * **Sequential**: [`Tuple2`], [`Tuple3`], [`Tuple4`] run parsers back to back
//! * **Error handling**: [`WithContext`] labels failures

use super::core::{ParseError, ParseResult, Parser};
use std::marker::PhantomData;

/// Satisfy: consumes one item for which `f` returns `Some`.
///
/// `label` names what was expected and is reported on mismatch.
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    label: &'static str,
    f: F,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    pub fn new(label: &'static str, f: F) -> Self {
        Self {
            label,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    I: std::fmt::Debug,
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let item = input.get(pos).ok_or_else(|| ParseError::eof(pos))?;
        match (self.f)(item) {
            Some(output) => Ok((pos + 1, output)),
            None => Err(ParseError::Unexpected {
                expected: self.label.to_string(),
                found: format!("{:?}", item),
                position: pos,
                context: None,
            }),
        }
    }
}

/// Choice: tries each parser in order and succeeds with the first success.
pub struct Choice<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Choice<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, O> for Choice<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(input, pos) {
                return Ok(result);
            }
        }
        Err(ParseError::NoAlternative {
            position: pos,
            context: None,
        })
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Tuple2<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, (O1, O2)> for Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2)> {
        let (pos, o1) = self.parser1.parse(input, pos)?;
        let (pos, o2) = self.parser2.parse(input, pos)?;
        Ok((pos, (o1, o2)))
    }
}

#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, I, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(I, O1, O2, O3)>,
}

impl<P1, P2, P3, I, O1, O2, O3> Tuple3<P1, P2, P3, I, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, I, O1, O2, O3> Parser<I, (O1, O2, O3)> for Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3)> {
        let (pos, o1) = self.parser1.parse(input, pos)?;
        let (pos, o2) = self.parser2.parse(input, pos)?;
        let (pos, o3) = self.parser3.parse(input, pos)?;
        Ok((pos, (o1, o2, o3)))
    }
}

#[derive(Clone)]
pub struct Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
    _phantom: PhantomData<(I, O1, O2, O3, O4)>,
}

impl<P1, P2, P3, P4, I, O1, O2, O3, O4> Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3, parser4: P4) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            parser4,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, P4, I, O1, O2, O3, O4> Parser<I, (O1, O2, O3, O4)>
    for Tuple4<P1, P2, P3, P4, I, O1, O2, O3, O4>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
    P4: Parser<I, O4>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3, O4)> {
        let (pos, o1) = self.parser1.parse(input, pos)?;
        let (pos, o2) = self.parser2.parse(input, pos)?;
        let (pos, o3) = self.parser3.parse(input, pos)?;
        let (pos, o4) = self.parser4.parse(input, pos)?;
        Ok((pos, (o1, o2, o3, o4)))
    }
}

/// WithContext: labels failures of the inner parser.
#[derive(Clone)]
pub struct WithContext<P> {
    parser: P,
    context: &'static str,
}

impl<P> WithContext<P> {
    pub fn new(parser: P, context: &'static str) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P> Parser<I, O> for WithContext<P>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser
            .parse(input, pos)
            .map_err(|e| e.with_context(self.context))
    }
}
