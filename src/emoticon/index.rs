//! Emoticon index queries.
//!
//! The index is never stored: every query walks the tokens and reads their
//! tags, so it always reflects the current state of the sequence, merged or
//! not.

use crate::analysis::sequence::{TokenSequence, TokenSpan};
use crate::analysis::token::Token;

/// An emoticon token's text and its index within the queried range.
pub type EmoticonEntry = (String, usize);

/// Collect `(text, index)` for every tagged token in `tokens`.
pub fn emoticon_index(tokens: &[Token]) -> Vec<EmoticonEntry> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_emoticon())
        .map(|(i, token)| (token.text.clone(), i))
        .collect()
}

impl TokenSequence {
    /// Emoticon tokens of the whole sequence, in order.
    pub fn emoticons(&self) -> Vec<EmoticonEntry> {
        emoticon_index(self.tokens())
    }

    /// Whether any token is tagged as an emoticon.
    pub fn has_emoticon(&self) -> bool {
        self.tokens().iter().any(Token::is_emoticon)
    }
}

impl TokenSpan<'_> {
    /// Emoticon tokens of the span; indices are relative to the span start.
    pub fn emoticons(&self) -> Vec<EmoticonEntry> {
        emoticon_index(self.tokens())
    }

    /// Whether any token of the span is tagged as an emoticon.
    pub fn has_emoticon(&self) -> bool {
        self.tokens().iter().any(Token::is_emoticon)
    }
}
