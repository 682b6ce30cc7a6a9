//! Tokenizer and matcher settings.
//!
//! The defaults reproduce the reference behaviour: fixed lookahead windows,
//! a class context that is any earlier `class` keyword, and flat parameter
//! extraction. [`MatcherConfig::structural`] switches every strategy to its
//! structure-aware variant.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl ScanConfig {
    pub fn structural() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            matcher: MatcherConfig::structural(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub unknown_chars: UnknownChars,

    /// Balance `${ ... }` inside backtick strings.
    #[serde(default)]
    pub template_interpolation: bool,
}

/// What the tokenizer does with a character no scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownChars {
    /// Emit a one-character `Other` token.
    #[default]
    Preserve,
    /// Skip the character. Positions still advance past it.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub class_scope: ClassScope,

    #[serde(default)]
    pub lookahead: Lookahead,

    #[serde(default)]
    pub parameters: ParameterScan,
}

impl MatcherConfig {
    pub fn structural() -> Self {
        Self {
            class_scope: ClassScope::Enclosing,
            lookahead: Lookahead::Balanced,
            parameters: ParameterScan::DepthCounted,
        }
    }
}

/// When an `identifier (` pair counts as a class method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassScope {
    /// A `class` keyword appears anywhere earlier in the stream.
    #[default]
    Anywhere,
    /// The innermost enclosing brace scope is a class body.
    Enclosing,
}

/// How far the arrow recognizer looks for `=>` and `async`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Lookahead {
    Fixed {
        /// Tokens past `=` searched for `=>`.
        #[serde(default = "default_arrow_window")]
        arrow_window: usize,
        /// Tokens searched for `async`, counting back from just past the
        /// first token after `=`. The search never reaches before the
        /// binding keyword, so values above 4 behave like 4.
        #[serde(default = "default_async_window")]
        async_window: usize,
    },
    /// Walk by nesting depth up to the statement boundary.
    Balanced,
}

impl Default for Lookahead {
    fn default() -> Self {
        Lookahead::Fixed {
            arrow_window: default_arrow_window(),
            async_window: default_async_window(),
        }
    }
}

/// How parameter names are read from a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterScan {
    /// Every identifier up to the first `)`.
    #[default]
    Flat,
    /// The leading identifier of each top-level comma-separated segment.
    DepthCounted,
}

fn default_arrow_window() -> usize {
    7
}

fn default_async_window() -> usize {
    5
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to open config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
