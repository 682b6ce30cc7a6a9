use clap::{Parser, Subcommand, ValueEnum};
use jsig_core::{
    Error, FunctionSignature, Token, TokenKind,
    analyzer::Matcher,
    config::{MatcherConfig, ScanConfig},
    preprocessor::{Preprocessor, TokenPreprocessor},
    tokenizer::token::Tokenizer,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON config file; defaults apply when omitted
    #[arg(short, long, env = "JSIG_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a source file
    Tokens {
        file: PathBuf,

        /// Only the tokens the matcher inspects
        #[arg(short, long)]
        significant: bool,
    },

    /// Print the functions detected in a source file
    Functions {
        file: PathBuf,

        /// Use depth tracking and brace scopes instead of fixed windows
        #[arg(short, long)]
        structural: bool,
    },

    /// Report unterminated strings and block comments
    Check { file: PathBuf },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] Error),

    #[error("{0} unterminated token(s) found")]
    Unterminated(usize),
}

#[derive(Serialize)]
struct Unterminated<'a> {
    kind: TokenKind,
    line: usize,
    column: usize,
    offset: usize,
    #[serde(skip)]
    token: &'a Token,
}

impl<'a> From<&'a Token> for Unterminated<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind,
            line: token.line,
            column: token.column,
            offset: token.offset,
            token,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ScanConfig, Error> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            ScanConfig::from_file(path)
        }
        None => Ok(ScanConfig::default()),
    }
}

fn read_source(path: &Path) -> Result<String, Error> {
    debug!(path = %path.display(), "reading source");
    Ok(std::fs::read_to_string(path)?)
}

fn output_json<T: Serialize>(data: &T) -> Result<(), Error> {
    let output = serde_json::to_string_pretty(data)
        .map_err(|e| Error::internal(format!("JSON serialization error: {}", e)))?;
    println!("{}", output);
    Ok(())
}

fn print_tokens(cli: &Cli, file: &Path, significant: bool) -> Result<(), Error> {
    let config = load_config(cli.config.as_deref())?;
    let source = read_source(file)?;
    let stream = Tokenizer::with_config(config.tokenizer).tokenize(&source);
    let tokens: Vec<Token> = if significant {
        TokenPreprocessor::new().process(stream)
    } else {
        stream.into_tokens()
    };
    info!(count = tokens.len(), "tokenized {}", file.display());

    match cli.output {
        OutputFormat::Json => output_json(&tokens),
        OutputFormat::Table => {
            for token in &tokens {
                println!(
                    "{:>5}:{:<4} {:<14} {:?}",
                    token.line,
                    token.column,
                    token.kind.to_string(),
                    token.text
                );
            }
            Ok(())
        }
    }
}

fn print_functions(cli: &Cli, file: &Path, structural: bool) -> Result<(), Error> {
    let mut config = load_config(cli.config.as_deref())?;
    if structural {
        config.matcher = MatcherConfig::structural();
    }
    let source = read_source(file)?;
    let stream = Tokenizer::with_config(config.tokenizer).tokenize(&source);
    let tokens = TokenPreprocessor::new().process(stream);
    let signatures: Vec<FunctionSignature> = Matcher::new(config.matcher).match_functions(&tokens);
    info!(count = signatures.len(), "matched {}", file.display());

    match cli.output {
        OutputFormat::Json => output_json(&signatures),
        OutputFormat::Table => {
            for signature in &signatures {
                println!(
                    "{:>5}:{:<4} {:<14} {}{}({})",
                    signature.line,
                    signature.column,
                    signature.kind.to_string(),
                    if signature.is_async { "async " } else { "" },
                    signature.name,
                    signature.parameters.join(", ")
                );
            }
            Ok(())
        }
    }
}

fn check_file(cli: &Cli, file: &Path) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let source = read_source(file)?;
    let stream = Tokenizer::with_config(config.tokenizer).tokenize(&source);
    let found: Vec<Unterminated> = stream.unterminated().map(Unterminated::from).collect();

    match cli.output {
        OutputFormat::Json => output_json(&found)?,
        OutputFormat::Table => {
            for entry in &found {
                let preview: String = entry.token.text.chars().take(20).collect();
                println!(
                    "{:>5}:{:<4} {:<14} {:?}",
                    entry.line,
                    entry.column,
                    entry.kind.to_string(),
                    preview
                );
            }
        }
    }

    if found.is_empty() {
        Ok(())
    } else {
        Err(CliError::Unterminated(found.len()))
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Tokens { file, significant } => Ok(print_tokens(cli, file, *significant)?),
        Commands::Functions { file, structural } => Ok(print_functions(cli, file, *structural)?),
        Commands::Check { file } => check_file(cli, file),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => {}
        Err(CliError::Unterminated(count)) => {
            eprintln!("{} unterminated token(s) found", count);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
