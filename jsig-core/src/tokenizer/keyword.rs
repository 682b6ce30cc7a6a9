//! # Keyword Classification
//!
//! The closed set of reserved words recognized by the tokenizer.
//!
//! Classification is purely lexical: an identifier-shaped lexeme becomes a
//! [`TokenKind::Keyword`](super::token::TokenKind::Keyword) iff its text is an
//! exact member of [`Keyword`]. No grammatical context is considered, so `as`
//! or `from` used as plain variable names are still keywords.
//!
//! The [`Keyword`] enum uses `strum` derive macros to enable:
//!
//! * String conversion via `EnumString` (`Keyword::from_str("async")`)
//! * Display formatting via `Display`
//! * Iteration over the whole set via `EnumIter`
//! * String reference access via `AsRefStr`

use std::str::FromStr;

/// Reserved words of the recognized JavaScript subset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Function,
    Const,
    Let,
    Var,
    Async,
    Await,
    Class,
    Constructor,
    Static,
    Get,
    Set,
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Return,
    Break,
    Continue,
    Throw,
    Try,
    Catch,
    Import,
    Export,
    Default,
    From,
    As,
}

impl Keyword {
    /// Looks up `text` in the keyword set. Matching is exact and case sensitive.
    pub fn lookup(text: &str) -> Option<Self> {
        Self::from_str(text).ok()
    }

    /// Binding keywords that can introduce an arrow function assignment.
    pub fn is_binding(self) -> bool {
        matches!(self, Keyword::Const | Keyword::Let | Keyword::Var)
    }

    /// Keywords that can only begin a new statement. A balanced forward walk
    /// stops when it meets one of these at nesting depth zero.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            Keyword::Const
                | Keyword::Let
                | Keyword::Var
                | Keyword::Function
                | Keyword::Class
                | Keyword::If
                | Keyword::For
                | Keyword::While
                | Keyword::Do
                | Keyword::Switch
                | Keyword::Return
                | Keyword::Throw
                | Keyword::Try
                | Keyword::Import
                | Keyword::Export
        )
    }
}

/// Returns true when `text` is a member of the keyword set.
pub fn is_keyword(text: &str) -> bool {
    Keyword::lookup(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keyword_set_is_closed() {
        assert_eq!(Keyword::iter().count(), 29);
        for keyword in Keyword::iter() {
            assert_eq!(Keyword::lookup(keyword.as_ref()), Some(keyword));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Keyword::lookup("function"), Some(Keyword::Function));
        assert_eq!(Keyword::lookup("constructor"), Some(Keyword::Constructor));
        assert_eq!(Keyword::lookup("Function"), None);
        assert_eq!(Keyword::lookup("functions"), None);
        assert_eq!(Keyword::lookup("extends"), None);
        assert_eq!(Keyword::lookup(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Keyword::Async.to_string(), "async");
        assert_eq!(Keyword::Default.to_string(), "default");
    }

    #[test]
    fn test_binding_and_statement_groups() {
        assert!(Keyword::Let.is_binding());
        assert!(!Keyword::Async.is_binding());
        assert!(Keyword::Return.starts_statement());
        assert!(!Keyword::Async.starts_statement());
        assert!(!Keyword::Await.starts_statement());
    }
}
