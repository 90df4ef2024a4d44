//! Emoticon detection.
//!
//! Detection runs in two stages that can be used separately:
//!
//! 1. [`PhraseMatcher`] scans a token sequence for the phrases of a
//!    [`PhraseVocabulary`] and returns greedy, non-overlapping,
//!    longest-first [`Match`]es. This stage has no side effects.
//! 2. [`Annotator`] tags the matched tokens, attaches lookup annotations,
//!    and optionally merges each multi-token match into one token.
//!
//! [`EmoticonComponent`] wires both stages together and plugs into an
//! analysis pipeline. Tagged tokens are queried with
//! [`TokenSequence::emoticons`](crate::analysis::sequence::TokenSequence::emoticons).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use emoticon::analysis::sequence::TokenSequence;
//! use emoticon::analysis::tokenizer::RegexTokenizer;
//! use emoticon::emoticon::{Annotator, EmptyPhrasePolicy, PhraseMatcher, PhraseVocabulary};
//!
//! let tokenizer = RegexTokenizer::punctuation();
//! let vocabulary = Arc::new(
//!     PhraseVocabulary::new([":)", ":("], &tokenizer, EmptyPhrasePolicy::Error).unwrap(),
//! );
//! let matcher = PhraseMatcher::new(vocabulary.clone(), "EMOTICON");
//!
//! let mut seq = TokenSequence::from_words(["This", "is", "a", "test", ":", ")", ":", "("]);
//! let matches = matcher.find_matches(&seq);
//! assert_eq!(matches.len(), 2);
//!
//! Annotator::new(true).annotate(&mut seq, &matches, &vocabulary).unwrap();
//! assert_eq!(seq.len(), 6);
//! assert_eq!(seq.emoticons(), vec![(":)".to_string(), 4), (":(".to_string(), 5)]);
//! ```

pub mod annotator;
pub mod component;
pub mod config;
pub mod index;
pub mod matcher;
pub mod vocabulary;

pub use annotator::{Annotator, PHRASE_ATTRIBUTE};
pub use component::EmoticonComponent;
pub use config::{EmoticonAttrs, EmoticonConfig, EmoticonConfigBuilder};
pub use index::{EmoticonEntry, emoticon_index};
pub use matcher::{Match, PhraseMatcher};
pub use vocabulary::{BASE_EMOTICONS, EmptyPhrasePolicy, Phrase, PhraseVocabulary, load_lookup};
