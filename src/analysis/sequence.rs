//! Token sequences and spans.
//!
//! A [`TokenSequence`] is the document-level container the emoticon pipeline
//! works on: an ordered, mutable-length list of tokens, optionally together
//! with the source text the tokens were cut from. A [`TokenSpan`] is a
//! borrowed, contiguous sub-range of a sequence.
//!
//! # Examples
//!
//! ```
//! use emoticon::analysis::sequence::TokenSequence;
//! use emoticon::analysis::tokenizer::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::punctuation();
//! let seq = TokenSequence::from_text("so :) much", &tokenizer).unwrap();
//!
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.span_text(1, 3).unwrap(), ":)");
//! assert!(!seq.has_emoticon());
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{EmoticonError, Result};

/// An ordered list of tokens, optionally backed by its source text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSequence {
    /// Source text the token offsets point into, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Create a sequence from already-segmented tokens, without source text.
    ///
    /// Span texts of such a sequence are the concatenation of token texts.
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenSequence { text: None, tokens }
    }

    /// Create a sequence from surface strings, numbering positions from 0.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();
        Self::new(tokens)
    }

    /// Tokenize `text` and keep it as the sequence's source text.
    pub fn from_text(text: &str, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let tokens = tokenizer.tokenize(text)?.collect();
        Ok(TokenSequence {
            text: Some(text.to_string()),
            tokens,
        })
    }

    /// The source text, if the sequence was built from one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable access to the tokens, for tagging in place.
    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Consume the sequence, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Get the token at `index`.
    pub fn token(&self, index: usize) -> Result<&Token> {
        self.tokens
            .get(index)
            .ok_or_else(|| EmoticonError::out_of_range(index, self.tokens.len()))
    }

    /// Whether the token at `index` is tagged as part of an emoticon.
    pub fn is_emoticon(&self, index: usize) -> Result<bool> {
        Ok(self.token(index)?.is_emoticon())
    }

    /// The custom annotation of the token at `index`.
    pub fn annotation(&self, index: usize) -> Result<Option<&str>> {
        Ok(self.token(index)?.annotation())
    }

    /// Borrow the half-open token range `[start, end)` as a span.
    pub fn span(&self, start: usize, end: usize) -> Result<TokenSpan<'_>> {
        self.check_range(start, end)?;
        Ok(TokenSpan {
            sequence: self,
            start,
            end,
        })
    }

    /// Surface text of the token range `[start, end)`.
    ///
    /// With source text and consistent offsets this is the exact source
    /// substring, inter-token whitespace included. Otherwise it is the
    /// concatenation of the token texts.
    pub fn span_text(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        Ok(self.span_text_unchecked(start, end))
    }

    pub(crate) fn span_text_unchecked(&self, start: usize, end: usize) -> String {
        let tokens = &self.tokens[start..end];
        if let (Some(text), Some(first), Some(last)) = (&self.text, tokens.first(), tokens.last()) {
            let (from, to) = (first.start_offset, last.end_offset);
            if from < to && text.get(from..to).is_some() && Self::offsets_cover(text, tokens) {
                return text[from..to].to_string();
            }
        }
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Replace the token range `[start, end)` with a single token.
    ///
    /// Every token after the range shifts left by `end - start - 1` and all
    /// positions are renumbered. Indices computed before the call are stale
    /// afterwards; use the annotator to merge several ranges at once.
    pub fn merge_range(&mut self, start: usize, end: usize, merged: Token) -> Result<()> {
        self.check_range(start, end)?;
        if start == end {
            return Err(EmoticonError::invalid_argument(format!(
                "cannot merge empty range [{start}, {end})"
            )));
        }
        self.tokens.splice(start..end, std::iter::once(merged));
        self.renumber();
        Ok(())
    }

    /// Replace all tokens at once, renumbering positions.
    pub(crate) fn replace_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.renumber();
    }

    fn renumber(&mut self) {
        for (position, token) in self.tokens.iter_mut().enumerate() {
            token.position = position;
        }
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.tokens.len();
        if end > len {
            return Err(EmoticonError::out_of_range(end, len));
        }
        if start > end {
            return Err(EmoticonError::invalid_argument(format!(
                "span start {start} is after end {end}"
            )));
        }
        Ok(())
    }

    /// Each token's text must be what its offsets point at.
    fn offsets_cover(text: &str, tokens: &[Token]) -> bool {
        tokens
            .iter()
            .all(|t| text.get(t.start_offset..t.end_offset) == Some(t.text.as_str()))
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// A borrowed, contiguous range of a [`TokenSequence`].
#[derive(Clone, Copy, Debug)]
pub struct TokenSpan<'a> {
    sequence: &'a TokenSequence,
    start: usize,
    end: usize,
}

impl<'a> TokenSpan<'a> {
    /// Start index in the parent sequence.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End index (exclusive) in the parent sequence.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens in the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span has no tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Tokens covered by the span.
    pub fn tokens(&self) -> &'a [Token] {
        &self.sequence.tokens[self.start..self.end]
    }

    /// Get the token at `index`, relative to the span start.
    pub fn token(&self, index: usize) -> Result<&'a Token> {
        self.tokens()
            .get(index)
            .ok_or_else(|| EmoticonError::out_of_range(index, self.len()))
    }

    /// Surface text of the span.
    pub fn text(&self) -> String {
        self.sequence.span_text_unchecked(self.start, self.end)
    }
}
