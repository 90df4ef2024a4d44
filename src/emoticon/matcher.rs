//! Greedy longest-match phrase matcher.
//!
//! The matcher scans token texts left to right. At each position it tries
//! the phrases whose first token equals the current token, longest first,
//! and accepts the first that matches. Scanning resumes after the accepted
//! match, so matches never overlap; when nothing matches it advances by one.
//!
//! ```text
//! vocabulary: ":"  ":)"  ":-("
//! tokens:     ["so", ":", ")", ":", "-", "("]
//!                    └──:)──┘  └───:-(───┘
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use log::trace;

use crate::analysis::sequence::TokenSequence;
use crate::analysis::token::Token;

use super::vocabulary::PhraseVocabulary;

/// A matched phrase occurrence over the token range `[start, end)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Identifier of the matcher that produced this match
    pub pattern_id: Arc<str>,
    /// Registration index of the matched phrase in the vocabulary
    pub phrase: usize,
    /// First token index
    pub start: usize,
    /// One past the last token index
    pub end: usize,
}

impl Match {
    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match covers no tokens. Matches from a scan never do.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds non-overlapping vocabulary phrase occurrences in token sequences.
#[derive(Clone, Debug)]
pub struct PhraseMatcher {
    vocabulary: Arc<PhraseVocabulary>,
    pattern_id: Arc<str>,
    /// first token text -> phrase indices, longest first, then by registration
    first_token_index: AHashMap<String, Vec<usize>>,
}

impl PhraseMatcher {
    /// Create a matcher over `vocabulary`, tagging matches with `pattern_id`.
    pub fn new<S: AsRef<str>>(vocabulary: Arc<PhraseVocabulary>, pattern_id: S) -> Self {
        let mut first_token_index: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (index, phrase) in vocabulary.phrases().iter().enumerate() {
            first_token_index
                .entry(phrase.first().to_string())
                .or_default()
                .push(index);
        }

        let phrases = vocabulary.phrases();
        for candidates in first_token_index.values_mut() {
            // stable: equal lengths stay in registration order
            candidates.sort_by(|a, b| phrases[*b].len().cmp(&phrases[*a].len()));
        }

        PhraseMatcher {
            vocabulary,
            pattern_id: Arc::from(pattern_id.as_ref()),
            first_token_index,
        }
    }

    /// The vocabulary this matcher scans for.
    pub fn vocabulary(&self) -> &Arc<PhraseVocabulary> {
        &self.vocabulary
    }

    /// The identifier attached to every match.
    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    /// Scan a whole sequence.
    pub fn find_matches(&self, sequence: &TokenSequence) -> Vec<Match> {
        self.find_in_tokens(sequence.tokens())
    }

    /// Scan a token slice. Match indices are relative to the slice.
    pub fn find_in_tokens(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match self.longest_match_at(tokens, i) {
                Some(phrase) => {
                    let len = self.vocabulary.phrases()[phrase].len();
                    trace!(
                        "{}: matched {:?} at [{}, {})",
                        self.pattern_id,
                        self.vocabulary.phrases()[phrase].source(),
                        i,
                        i + len
                    );
                    matches.push(Match {
                        pattern_id: Arc::clone(&self.pattern_id),
                        phrase,
                        start: i,
                        end: i + len,
                    });
                    i += len;
                }
                None => i += 1,
            }
        }

        matches
    }

    /// Index of the longest phrase matching at `start`, if any.
    pub fn longest_match_at(&self, tokens: &[Token], start: usize) -> Option<usize> {
        let first = tokens.get(start)?;
        let candidates = self.first_token_index.get(first.text.as_str())?;
        let remaining = &tokens[start..];

        candidates.iter().copied().find(|&index| {
            let phrase = &self.vocabulary.phrases()[index];
            phrase.len() <= remaining.len()
                && phrase
                    .tokens()
                    .iter()
                    .zip(remaining)
                    .all(|(expected, token)| *expected == token.text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::RegexTokenizer;
    use crate::emoticon::vocabulary::{EmptyPhrasePolicy, Phrase};

    fn phrase(source: &str, tokens: &[&str]) -> Phrase {
        Phrase::new(source, tokens.iter().map(|t| t.to_string()).collect()).unwrap()
    }

    fn matcher(phrases: Vec<Phrase>) -> PhraseMatcher {
        PhraseMatcher::new(Arc::new(PhraseVocabulary::from_phrases(phrases)), "EMOTICON")
    }

    fn spans(matches: &[Match]) -> Vec<(usize, usize)> {
        matches.iter().map(|m| (m.start, m.end)).collect()
    }

    #[test]
    fn test_no_matches() {
        let matcher = matcher(vec![phrase(":)", &[":", ")"])]);
        let seq = TokenSequence::from_words(["nothing", "to", "see", ":"]);
        assert!(matcher.find_matches(&seq).is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let matcher = matcher(vec![phrase(":)", &[":", ")"])]);
        assert!(matcher.find_matches(&TokenSequence::default()).is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        let matcher = matcher(vec![phrase(":", &[":"]), phrase(":)", &[":", ")"])]);
        let seq = TokenSequence::from_words([":", ")"]);

        let matches = matcher.find_matches(&seq);
        assert_eq!(spans(&matches), vec![(0, 2)]);
        assert_eq!(matches[0].phrase, 1);
    }

    #[test]
    fn test_shorter_phrase_when_longer_does_not_fit() {
        let matcher = matcher(vec![
            phrase(":))", &[":", ")", ")"]),
            phrase(":)", &[":", ")"]),
        ]);
        let seq = TokenSequence::from_words(["a", ":", ")", "b", ":", ")"]);

        let matches = matcher.find_matches(&seq);
        assert_eq!(spans(&matches), vec![(1, 3), (4, 6)]);
        assert!(matches.iter().all(|m| m.phrase == 1));
    }

    #[test]
    fn test_matches_do_not_overlap() {
        // ":)" and "):" overlap on the ")" of ":):"
        let matcher = matcher(vec![phrase(":)", &[":", ")"]), phrase("):", &[")", ":"])]);
        let seq = TokenSequence::from_words([":", ")", ":", ")", ":"]);

        let matches = matcher.find_matches(&seq);
        assert_eq!(spans(&matches), vec![(0, 2), (2, 4)]);
        for pair in matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_equal_length_tie_goes_to_first_registered() {
        let matcher = matcher(vec![
            phrase("first", &[":", ")"]),
            phrase("second", &[":", ")"]),
        ]);
        let seq = TokenSequence::from_words([":", ")"]);

        let matches = matcher.find_matches(&seq);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].phrase, 0);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = matcher(vec![phrase("xD", &["xD"])]);
        let seq = TokenSequence::from_words(["XD", "xd", "xD"]);
        assert_eq!(spans(&matcher.find_matches(&seq)), vec![(2, 3)]);
    }

    #[test]
    fn test_phrase_longer_than_remaining_tokens() {
        let matcher = matcher(vec![phrase(":-(", &[":", "-", "("])]);
        let seq = TokenSequence::from_words(["ok", ":", "-"]);
        assert!(matcher.find_matches(&seq).is_empty());
    }

    #[test]
    fn test_pattern_id_attached() {
        let vocab = PhraseVocabulary::from_phrases(vec![phrase(":)", &[":)"])]);
        let matcher = PhraseMatcher::new(Arc::new(vocab), "SMILEY");
        let matches = matcher.find_matches(&TokenSequence::from_words([":)"]));

        assert_eq!(&*matches[0].pattern_id, "SMILEY");
        assert_eq!(matcher.pattern_id(), "SMILEY");
    }

    #[test]
    fn test_find_in_sub_range() {
        let matcher = matcher(vec![phrase(":)", &[":", ")"])]);
        let seq = TokenSequence::from_words(["a", ":", ")", "b", ":", ")"]);

        let matches = matcher.find_in_tokens(&seq.tokens()[3..]);
        assert_eq!(spans(&matches), vec![(1, 3)]);
    }

    #[test]
    fn test_base_vocabulary_with_punctuation_tokenizer() {
        let tokenizer = RegexTokenizer::punctuation();
        let vocab = PhraseVocabulary::new(
            crate::emoticon::vocabulary::BASE_EMOTICONS.iter(),
            &tokenizer,
            EmptyPhrasePolicy::Error,
        )
        .unwrap();
        let matcher = PhraseMatcher::new(Arc::new(vocab), "EMOTICON");
        let seq = TokenSequence::from_text("This is a test :) :(", &tokenizer).unwrap();

        assert_eq!(spans(&matcher.find_matches(&seq)), vec![(4, 6), (6, 8)]);
    }

    #[test]
    fn test_generated_sequences_yield_disjoint_exact_matches() {
        let tokenizer = RegexTokenizer::punctuation();
        let vocab = Arc::new(PhraseVocabulary::base(&tokenizer).unwrap());
        let matcher = PhraseMatcher::new(Arc::clone(&vocab), "EMOTICON");

        let mut pool: Vec<String> = vocab
            .phrases()
            .iter()
            .flat_map(|p| p.tokens().iter().cloned())
            .collect();
        pool.sort();
        pool.dedup();
        pool.extend(["so", "happy", "today"].map(String::from));

        // xorshift, fixed seed
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let mut total = 0;
        for _ in 0..500 {
            let len = (next() % 40) as usize;
            let words: Vec<&str> = (0..len)
                .map(|_| pool[(next() % pool.len() as u64) as usize].as_str())
                .collect();
            let seq = TokenSequence::from_words(words);
            let matches = matcher.find_matches(&seq);
            total += matches.len();

            for pair in matches.windows(2) {
                assert!(pair[0].end <= pair[1].start, "overlap in {matches:?}");
            }
            for m in &matches {
                assert!(!m.is_empty() && m.end <= seq.len());
                let texts: Vec<&str> = seq.tokens()[m.start..m.end]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect();
                assert_eq!(texts, vocab.phrases()[m.phrase].tokens());
            }
        }

        assert!(total > 0);
    }
}
