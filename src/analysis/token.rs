//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! the units that tokenizers produce and that the emoticon matcher scans.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, offsets and emoticon tag
//! - [`TokenType`] - Classification of token content (alphanumeric, punctuation, etc.)
//! - [`TokenMetadata`] - Additional metadata attached to tokens
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use emoticon::analysis::token::Token;
//!
//! let token = Token::with_offsets(":)", 4, 15, 17);
//! assert_eq!(token.text, ":)");
//! assert_eq!(token.position, 4);
//! assert!(!token.is_emoticon());
//!
//! let token = token.tag_emoticon().with_annotation("happy");
//! assert!(token.is_emoticon());
//! assert_eq!(token.annotation(), Some("happy"));
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's surface text
/// - `position` - Index in the token sequence (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the source text
/// - `is_emoticon` - Whether the token takes part in an emoticon match
/// - `annotation` - Optional lookup annotation for the matched emoticon
/// - `metadata` - Optional additional metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text of the token
    pub text: String,

    /// The position of the token in its sequence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the source text
    pub start_offset: usize,

    /// The byte offset where this token ends in the source text
    pub end_offset: usize,

    /// Set by the annotator on every token inside an emoticon match
    #[serde(default)]
    pub is_emoticon: bool,

    /// Custom annotation resolved from the lookup table, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,

    /// Additional metadata that can be attached to tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text
    Alphanum,
    /// Numeric values
    Num,
    /// Punctuation marks
    Punctuation,
    /// A merged emoticon token
    Emoticon,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a piece of text.
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token type classification
    pub token_type: Option<TokenType>,

    /// Additional custom attributes
    pub attributes: HashMap<String, String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            is_emoticon: false,
            annotation: None,
            metadata: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as part of an emoticon.
    pub fn tag_emoticon(mut self) -> Self {
        self.is_emoticon = true;
        self
    }

    /// Check if this token is part of an emoticon.
    pub fn is_emoticon(&self) -> bool {
        self.is_emoticon
    }

    /// Attach a custom annotation.
    pub fn with_annotation<S: Into<String>>(mut self, annotation: S) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Get the custom annotation, if any.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.token_type = Some(token_type);
        self
    }

    /// Get the token type, if one was recorded.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// Record a custom attribute in the token's metadata.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata
            .get_or_insert_with(TokenMetadata::new)
            .set_attribute(key, value);
    }

    /// Get a custom attribute from the token's metadata.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get_attribute(key)
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl TokenMetadata {
    /// Create a new empty metadata object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom attribute.
    pub fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get a custom attribute.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
