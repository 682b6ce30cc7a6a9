//! Locating the `=>` of an arrow assignment and deciding whether it is async.
//!
//! [`Lookahead::Fixed`] inspects bounded windows of tokens and nothing else.
//! [`Lookahead::Balanced`] walks by `(`/`{` nesting depth and ends at the
//! statement boundary, so an arrow nested inside a call argument is never
//! attributed to the outer binding. It also ends at the next `const`, `let`
//! or `var` at any depth, which keeps the total work linear even when
//! brackets are never closed.

use crate::config::Lookahead;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::{Token, TokenKind};

/// Index of the `=>` belonging to the assignment whose `=` is at `equals`.
pub fn find_arrow(input: &[Token], equals: usize, lookahead: Lookahead) -> Option<usize> {
    match lookahead {
        Lookahead::Fixed { arrow_window, .. } => {
            let last = equals.saturating_add(arrow_window);
            (equals + 1..=last)
                .take_while(|&i| i < input.len())
                .find(|&i| input[i].kind == TokenKind::Arrow)
        }
        Lookahead::Balanced => balanced_arrow(input, equals),
    }
}

/// Whether the arrow function bound at `binding` (the `const`/`let`/`var`
/// token) is marked `async`.
pub fn is_async_arrow(
    input: &[Token],
    binding: usize,
    equals: usize,
    arrow: usize,
    lookahead: Lookahead,
) -> bool {
    match lookahead {
        Lookahead::Fixed { async_window, .. } => {
            // The window ends just past the first token of the value.
            let end = (equals + 2).min(input.len());
            let start = end.saturating_sub(async_window).max(binding);
            input[start..end].iter().any(|t| t.is_keyword(Keyword::Async))
        }
        Lookahead::Balanced => balanced_async(input, equals, arrow),
    }
}

fn balanced_arrow(input: &[Token], equals: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in input.iter().enumerate().skip(equals + 1) {
        match token.kind {
            TokenKind::Arrow if depth == 0 => return Some(i),
            TokenKind::ParenOpen | TokenKind::BraceOpen => depth += 1,
            TokenKind::ParenClose | TokenKind::BraceClose => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            TokenKind::Semicolon if depth == 0 => return None,
            // A binding keyword at any depth ends the walk, so walks from
            // successive bindings never overlap.
            TokenKind::Keyword if token.keyword().is_some_and(Keyword::is_binding) => {
                return None;
            }
            TokenKind::Keyword if depth == 0 => {
                if token.keyword().is_some_and(Keyword::starts_statement) {
                    return None;
                }
            }
            TokenKind::EndOfFile => return None,
            _ => {}
        }
    }
    None
}

fn balanced_async(input: &[Token], equals: usize, arrow: usize) -> bool {
    let mut depth = 0usize;
    for token in input[equals + 1..arrow].iter().rev() {
        match token.kind {
            TokenKind::ParenClose | TokenKind::BraceClose => depth += 1,
            TokenKind::ParenOpen | TokenKind::BraceOpen => depth = depth.saturating_sub(1),
            _ if depth == 0 && token.is_keyword(Keyword::Async) => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessor::{Preprocessor, TokenPreprocessor};
    use pretty_assertions::assert_eq;

    const FIXED: Lookahead = Lookahead::Fixed {
        arrow_window: 7,
        async_window: 5,
    };

    fn tokens(source: &str) -> Vec<Token> {
        TokenPreprocessor::new().process(crate::tokenize(source))
    }

    #[test]
    fn test_fixed_window_bound() {
        let input = tokens("const f = (a, b) => a;");
        assert_eq!(find_arrow(&input, 2, FIXED), Some(8));

        // `=>` is eight tokens past `=`.
        let input = tokens("const f = (a, b, c) => a;");
        assert_eq!(find_arrow(&input, 2, FIXED), None);
    }

    #[test]
    fn test_fixed_window_saturates() {
        let huge = Lookahead::Fixed {
            arrow_window: usize::MAX,
            async_window: 5,
        };
        let input = tokens("const f = (a, b, c, d, e) => a;");
        let arrow = input.iter().position(|t| t.kind == TokenKind::Arrow);
        assert_eq!(find_arrow(&input, 2, huge), arrow);
    }

    #[test]
    fn test_fixed_window_sees_nested_arrow() {
        let input = tokens("const x = foo((a) => a);");
        assert!(find_arrow(&input, 2, FIXED).is_some());
    }

    #[test]
    fn test_fixed_async_window() {
        let input = tokens("const run = async (x, y) => x;");
        let arrow = find_arrow(&input, 2, FIXED).unwrap();
        assert!(is_async_arrow(&input, 0, 2, arrow, FIXED));

        let input = tokens("const run = /* long */ async x => 1;");
        let arrow = find_arrow(&input, 2, FIXED).unwrap();
        assert!(!is_async_arrow(&input, 0, 2, arrow, FIXED));
    }

    #[test]
    fn test_async_window_counts_back_from_first_value_token() {
        let window = |async_window| Lookahead::Fixed {
            arrow_window: 7,
            async_window,
        };
        let input = tokens("const run = async x => x;");
        let arrow = find_arrow(&input, 2, FIXED).unwrap();
        assert!(!is_async_arrow(&input, 0, 2, arrow, window(0)));
        assert!(is_async_arrow(&input, 0, 2, arrow, window(1)));

        // Past the binding keyword a wider window sees nothing new.
        let input = tokens("async; const run = (x) => x;");
        let arrow = find_arrow(&input, 4, FIXED).unwrap();
        assert!(!is_async_arrow(&input, 2, 4, arrow, window(4)));
        assert!(!is_async_arrow(&input, 2, 4, arrow, window(100)));
    }

    #[test]
    fn test_balanced_ignores_nested_arrow() {
        let input = tokens("const x = foo((a) => a);");
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), None);
    }

    #[test]
    fn test_balanced_has_no_bound() {
        let input = tokens("const f = (a, b, c, d, e, f, g, h) => a;");
        let arrow = input.iter().position(|t| t.kind == TokenKind::Arrow);
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), arrow);
    }

    #[test]
    fn test_balanced_stops_at_statement_boundary() {
        let input = tokens("let x = 1; const g = () => 2;");
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), None);

        let input = tokens("let x = 1\nconst g = () => 2");
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), None);

        let input = tokens("{ let x = y } () => 1");
        assert_eq!(find_arrow(&input, 3, Lookahead::Balanced), None);
    }

    #[test]
    fn test_balanced_stops_at_nested_binding() {
        let input = tokens("const a = (const b = (x) => x");
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), None);
        let arrow = input.iter().position(|t| t.kind == TokenKind::Arrow);
        assert_eq!(find_arrow(&input, 6, Lookahead::Balanced), arrow);

        let input = tokens("const f = (x) => { const y = 1; }");
        assert_eq!(find_arrow(&input, 2, Lookahead::Balanced), Some(6));
    }

    #[test]
    fn test_balanced_async() {
        let input = tokens("const run = /* long */ async x => 1;");
        let arrow = find_arrow(&input, 2, Lookahead::Balanced).unwrap();
        assert!(is_async_arrow(&input, 0, 2, arrow, Lookahead::Balanced));

        let input = tokens("const run = (async) => 1;");
        let arrow = find_arrow(&input, 2, Lookahead::Balanced).unwrap();
        assert!(!is_async_arrow(&input, 0, 2, arrow, Lookahead::Balanced));
    }
}
