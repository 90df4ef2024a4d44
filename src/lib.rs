//! # Emoticon
//!
//! Detects text emoticons such as `:)` or `:-(` in tokenized text, tags the
//! tokens that form them, and optionally merges multi-token emoticons into
//! single tokens.
//!
//! ## Features
//!
//! - Greedy longest-match phrase matching over token sequences
//! - In-place tagging with optional span merging that keeps offsets intact
//! - Custom annotations through a lookup table
//! - Pluggable tokenizers shared between vocabulary and documents
//! - Parallel batch processing of independent documents

pub mod analysis;
pub mod cli;
pub mod emoticon;
pub mod error;

pub mod prelude {
    pub use crate::analysis::component::Component;
    pub use crate::analysis::pipeline::Pipeline;
    pub use crate::analysis::sequence::{TokenSequence, TokenSpan};
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::{
        RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
    };
    pub use crate::emoticon::{EmoticonComponent, EmoticonConfig};
    pub use crate::error::{EmoticonError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
