//! Regex-based tokenizer implementation.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{EmoticonError, Result};

/// Runs of word characters, or any single character that is neither a word
/// character nor whitespace.
const PUNCTUATION_PATTERN: &str = r"\w+|[^\w\s]";

lazy_static! {
    static ref PUNCTUATION_REGEX: Arc<Regex> =
        Arc::new(Regex::new(PUNCTUATION_PATTERN).expect("punctuation pattern is valid"));
}

/// A tokenizer that emits every match of a regular expression as a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer that splits every punctuation character into its
    /// own token, so ":-)" becomes `[":", "-", ")"]`.
    pub fn punctuation() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&PUNCTUATION_REGEX),
        }
    }

    /// Create a regex tokenizer with a custom pattern.
    ///
    /// Punctuation the pattern does not match is dropped, and an emoticon
    /// vocabulary built with such a tokenizer loses those characters too.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| EmoticonError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::punctuation()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .filter(|mat| !mat.as_str().is_empty())
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                    .with_token_type(TokenType::detect(mat.as_str()))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
