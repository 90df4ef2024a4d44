//! Tagging and merging of matched emoticon spans.
//!
//! The annotator takes the matches of one scan, tags every covered token,
//! attaches lookup annotations, and in merge mode collapses each multi-token
//! match into a single token. Every tagged token records the vocabulary
//! entry it matched under the [`PHRASE_ATTRIBUTE`] metadata key. All span texts are computed from the sequence
//! as it was before any merge, and the merged token list is built in one
//! pass, so no match index is ever read after it has shifted.

use log::debug;

use crate::analysis::sequence::TokenSequence;
use crate::analysis::token::{Token, TokenType};
use crate::error::{EmoticonError, Result};

use super::matcher::Match;
use super::vocabulary::PhraseVocabulary;

/// Token metadata key holding the vocabulary entry a tagged token matched.
pub const PHRASE_ATTRIBUTE: &str = "phrase";

/// Applies matches to a token sequence.
#[derive(Clone, Copy, Debug)]
pub struct Annotator {
    merge_spans: bool,
}

impl Default for Annotator {
    fn default() -> Self {
        Annotator { merge_spans: true }
    }
}

impl Annotator {
    /// Create an annotator; `merge_spans` selects merge mode.
    pub fn new(merge_spans: bool) -> Self {
        Annotator { merge_spans }
    }

    /// Whether multi-token matches are merged.
    pub fn merge_spans(&self) -> bool {
        self.merge_spans
    }

    /// Tag, annotate and optionally merge `matches` in `sequence`.
    ///
    /// `matches` must be sorted by start, pairwise disjoint, non-empty and
    /// inside the sequence, as produced by one matcher scan. Anything else
    /// is rejected before the sequence is touched.
    pub fn annotate(
        &self,
        sequence: &mut TokenSequence,
        matches: &[Match],
        vocabulary: &PhraseVocabulary,
    ) -> Result<()> {
        Self::validate(sequence, matches, vocabulary)?;
        if matches.is_empty() {
            return Ok(());
        }

        let spans: Vec<MatchedSpan<'_>> = matches
            .iter()
            .map(|m| {
                let text = sequence.span_text_unchecked(m.start, m.end);
                MatchedSpan {
                    annotation: vocabulary.annotation(&text).map(str::to_string),
                    phrase: vocabulary.phrases()[m.phrase].source(),
                    text,
                }
            })
            .collect();

        for (m, span) in matches.iter().zip(&spans) {
            for token in &mut sequence.tokens_mut()[m.start..m.end] {
                token.is_emoticon = true;
                token.annotation = span.annotation.clone();
                token.set_attribute(PHRASE_ATTRIBUTE, span.phrase);
            }
        }

        if self.merge_spans {
            let before = sequence.len();
            let merged = Self::merge(sequence.tokens(), matches, spans);
            sequence.replace_tokens(merged);
            debug!(
                "merged {} emoticon spans: {} -> {} tokens",
                matches.iter().filter(|m| m.len() > 1).count(),
                before,
                sequence.len()
            );
        }

        Ok(())
    }

    /// Build the merged token list from the pre-merge snapshot.
    fn merge(tokens: &[Token], matches: &[Match], spans: Vec<MatchedSpan<'_>>) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut next = 0;

        for (m, span) in matches.iter().zip(spans) {
            result.extend_from_slice(&tokens[next..m.start]);

            if m.len() == 1 {
                result.push(tokens[m.start].clone());
            } else {
                let first = &tokens[m.start];
                let last = &tokens[m.end - 1];
                let mut token =
                    Token::with_offsets(span.text, m.start, first.start_offset, last.end_offset)
                        .tag_emoticon()
                        .with_token_type(TokenType::Emoticon);
                token.annotation = span.annotation;
                token.set_attribute(PHRASE_ATTRIBUTE, span.phrase);
                result.push(token);
            }

            next = m.end;
        }

        result.extend_from_slice(&tokens[next..]);
        result
    }

    fn validate(sequence: &TokenSequence, matches: &[Match], vocabulary: &PhraseVocabulary) -> Result<()> {
        let len = sequence.len();
        let mut previous_end = 0;

        for m in matches {
            if m.phrase >= vocabulary.len() {
                return Err(EmoticonError::out_of_range(m.phrase, vocabulary.len()));
            }
            if m.end > len {
                return Err(EmoticonError::out_of_range(m.end, len));
            }
            if m.start >= m.end {
                return Err(EmoticonError::analysis(format!(
                    "empty match [{}, {})",
                    m.start, m.end
                )));
            }
            if m.start < previous_end {
                return Err(EmoticonError::analysis(format!(
                    "match [{}, {}) overlaps or precedes the previous match",
                    m.start, m.end
                )));
            }
            previous_end = m.end;
        }

        Ok(())
    }
}

/// Text, annotation and vocabulary entry of one match.
struct MatchedSpan<'a> {
    text: String,
    annotation: Option<String>,
    phrase: &'a str,
}
