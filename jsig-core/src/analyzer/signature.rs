use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

/// The shape a detected function was recognized from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FunctionKind {
    /// `function name(`
    Declaration,
    /// `const|let|var name = ... =>`
    Arrow,
    /// `async function name(`
    AsyncFunction,
    /// `name(` in a class context
    ClassMethod,
}

/// One detected function-like construct.
///
/// `line`, `column` and `offset` locate the leading token of the matched
/// pattern. Parameter names are best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub kind: FunctionKind,
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub parameters: Vec<String>,
    pub is_async: bool,
}

impl FunctionSignature {
    pub fn new(
        kind: FunctionKind,
        leading: &Token,
        name: impl Into<String>,
        parameters: Vec<String>,
        is_async: bool,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            line: leading.line,
            column: leading.column,
            offset: leading.offset,
            parameters,
            is_async,
        }
    }
}
