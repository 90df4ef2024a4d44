//! Command line argument parsing for the emoticon CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Detect and tag text emoticons
#[derive(Parser, Debug, Clone)]
#[command(name = "emoticon")]
#[command(about = "Detects, tags and merges text emoticons such as :) and :-(")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EmoticonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EmoticonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tag emoticons in text
    Tag(TagArgs),

    /// List the vocabulary as seen by a tokenizer
    ///
    /// Annotations are shown for the emoticons as registered. When tagging,
    /// lookups use the matched source text, so an emoticon written with
    /// different spacing between its tokens is tagged without annotation.
    Vocab(VocabArgs),
}

/// Options shared by every command that builds an emoticon component
#[derive(Args, Debug, Clone)]
pub struct ComponentArgs {
    /// Tokenizer used for both the vocabulary and the text
    #[arg(short, long, default_value = "unicode")]
    pub tokenizer: TokenizerKind,

    /// Custom token regex; overrides --tokenizer
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// JSON config file (see EmoticonConfig)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// JSON lookup file mapping emoticons to annotations
    #[arg(short, long, value_name = "LOOKUP_FILE")]
    pub lookup: Option<PathBuf>,

    /// Extra emoticons to register
    #[arg(short = 'e', long = "extra", value_name = "EMOTICON")]
    pub extra: Vec<String>,
}

/// Arguments for tagging text
#[derive(Parser, Debug, Clone)]
pub struct TagArgs {
    /// Text to tag; read from stdin (one document per line) if omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Keep multi-token emoticons as separate tokens
    #[arg(long)]
    pub no_merge: bool,

    #[command(flatten)]
    pub component: ComponentArgs,
}

/// Arguments for listing the vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    /// Only list phrases made of more than one token
    #[arg(long)]
    pub multi_token: bool,

    #[command(flatten)]
    pub component: ComponentArgs,
}

/// Tokenizer choices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerKind {
    /// Unicode word boundaries, punctuation kept
    Unicode,
    /// Words and single punctuation characters
    Punctuation,
    /// Whitespace-separated chunks
    Whitespace,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
