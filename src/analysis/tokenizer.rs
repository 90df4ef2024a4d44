//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into tokens. The emoticon vocabulary is
//! tokenized with the same tokenizer as the documents it is matched against,
//! so the choice of tokenizer decides whether ":)" is one token or two.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries, keeps punctuation
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//!
//! # Examples
//!
//! ```
//! use emoticon::analysis::tokenizer::Tokenizer;
//! use emoticon::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world :)").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, ":)");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that a tokenizer can be shared by a
/// vocabulary and the documents processed on other threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use emoticon::analysis::token::{Token, TokenStream};
/// use emoticon::analysis::tokenizer::Tokenizer;
/// use emoticon::error::Result;
///
/// struct CharTokenizer;
///
/// impl Tokenizer for CharTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .char_indices()
///             .filter(|(_, c)| !c.is_whitespace())
///             .enumerate()
///             .map(|(i, (offset, c))| Token::with_offsets(c.to_string(), i, offset, offset + c.len_utf8()))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "char"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Tokens carry their byte offsets into `text` and consecutive positions
    /// starting at 0.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;
pub mod whitespace;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
