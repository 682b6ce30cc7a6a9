use jsig_core::config::{ScanConfig, TokenizerConfig, UnknownChars};
use jsig_core::preprocessor::{Preprocessor, TokenPreprocessor};
use jsig_core::tokenizer::token::Tokenizer;
use jsig_core::{TokenKind, match_functions, scan, tokenize};
use proptest::prelude::*;

fn js_fragment() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "function", "async", "const", "let", "class", "=>", "=", "(", ")", "{", "}", ";", ",",
        " ", "\t", "\n", "\r\n", "name", "$x", "_y", "42", "3.14", "'s'", "\"d\"", "`t`",
        "`${a}`", "'\\''", "// c\n", "/* b */", "/*", "\"open", ".", "+", "[", "]", "é",
    ]);
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

fn configs() -> Vec<TokenizerConfig> {
    let mut configs = Vec::new();
    for unknown_chars in [UnknownChars::Preserve, UnknownChars::Drop] {
        for template_interpolation in [false, true] {
            configs.push(TokenizerConfig {
                unknown_chars,
                template_interpolation,
            });
        }
    }
    configs
}

proptest! {
    #[test]
    fn lossless_for_any_string(source in any::<String>()) {
        prop_assert_eq!(tokenize(&source).source_text(), source);
    }

    #[test]
    fn lossless_for_js_fragments(source in js_fragment()) {
        let stream = Tokenizer::with_config(TokenizerConfig {
            template_interpolation: true,
            ..TokenizerConfig::default()
        })
        .tokenize(&source);
        prop_assert_eq!(stream.source_text(), source);
    }

    #[test]
    fn single_trailing_end_of_file(source in js_fragment()) {
        for config in configs() {
            let stream = Tokenizer::with_config(config).tokenize(&source);
            let eofs = stream.iter().filter(|t| t.kind == TokenKind::EndOfFile).count();
            prop_assert_eq!(eofs, 1);
            let last = stream.as_slice().last().unwrap();
            prop_assert_eq!(last.kind, TokenKind::EndOfFile);
            prop_assert_eq!(last.text.as_str(), "");
        }
    }

    #[test]
    fn offsets_are_contiguous(source in js_fragment()) {
        let stream = tokenize(&source);
        let mut expected = 0;
        for token in stream.iter() {
            prop_assert_eq!(token.offset, expected);
            prop_assert_eq!(&source[token.offset..token.end_offset()], token.text.as_str());
            expected = token.end_offset();
        }
        prop_assert_eq!(expected, source.len());
    }

    #[test]
    fn idempotent(source in js_fragment()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn dropping_removes_only_unknown_characters(source in js_fragment()) {
        let preserved = tokenize(&source);
        let dropped = Tokenizer::with_config(TokenizerConfig {
            unknown_chars: UnknownChars::Drop,
            ..TokenizerConfig::default()
        })
        .tokenize(&source);

        let without_other: String = preserved
            .iter()
            .filter(|t| t.kind != TokenKind::Other)
            .map(|t| t.text.as_str())
            .collect();
        prop_assert_eq!(dropped.source_text(), without_other);

        let preprocessor = TokenPreprocessor::new();
        prop_assert_eq!(preprocessor.process(&preserved), preprocessor.process(&dropped));
    }

    #[test]
    fn matching_terminates_for_every_config(source in js_fragment()) {
        let tokens = TokenPreprocessor::new().process(tokenize(&source));
        let default = match_functions(&tokens);
        prop_assert!(default.len() <= tokens.len());
        let structural = scan(&source, &ScanConfig::structural());
        prop_assert!(structural.len() <= tokens.len());
    }
}
