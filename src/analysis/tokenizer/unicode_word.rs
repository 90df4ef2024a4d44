//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29). Unlike a plain
//! word tokenizer it keeps punctuation segments as tokens, dropping only
//! whitespace, which is what emoticon matching needs.
//!
//! # Examples
//!
//! ```
//! use emoticon::analysis::tokenizer::Tokenizer;
//! use emoticon::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello :)").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, ":");
//! assert_eq!(tokens[2].text, ")");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .enumerate()
            .map(|(position, (start, segment))| {
                Token::with_offsets(segment, position, start, start + segment.len())
                    .with_token_type(TokenType::detect(segment))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
