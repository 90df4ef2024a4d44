//! The emoticon pipeline component.
//!
//! Owns the vocabulary, matcher and annotator, and runs the two stages
//! (pure matching, then annotate-and-merge) over token sequences.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde_json::{Map, Value, json};

use crate::analysis::component::Component;
use crate::analysis::sequence::TokenSequence;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{EmoticonError, Result};

use super::annotator::{Annotator, PHRASE_ATTRIBUTE};
use super::config::EmoticonConfig;
use super::matcher::{Match, PhraseMatcher};
use super::vocabulary::PhraseVocabulary;

/// Detects, tags and merges emoticons in token sequences.
///
/// The vocabulary is immutable after construction and shared by every
/// sequence the component processes, including from several threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use emoticon::analysis::tokenizer::RegexTokenizer;
/// use emoticon::emoticon::{EmoticonComponent, EmoticonConfig};
///
/// let config = EmoticonConfig::builder().lookup_entry(":)", "happy").build();
/// let component = EmoticonComponent::new(Arc::new(RegexTokenizer::punctuation()), config).unwrap();
///
/// let doc = component.analyze("This is a test :) :(").unwrap();
/// assert_eq!(doc.emoticons(), vec![(":)".to_string(), 4), (":(".to_string(), 5)]);
/// assert_eq!(doc.annotation(4).unwrap(), Some("happy"));
/// ```
pub struct EmoticonComponent {
    tokenizer: Arc<dyn Tokenizer>,
    config: EmoticonConfig,
    matcher: PhraseMatcher,
    annotator: Annotator,
}

impl EmoticonComponent {
    /// Build the vocabulary with `tokenizer` and create the component.
    ///
    /// Fails with a configuration error if the config is invalid or an
    /// emoticon tokenizes to nothing under [`EmptyPhrasePolicy::Error`].
    ///
    /// [`EmptyPhrasePolicy::Error`]: super::vocabulary::EmptyPhrasePolicy::Error
    pub fn new(tokenizer: Arc<dyn Tokenizer>, config: EmoticonConfig) -> Result<Self> {
        config.validate()?;
        let vocabulary = PhraseVocabulary::new(
            config.emoticons(),
            tokenizer.as_ref(),
            config.empty_phrase_policy,
        )?
        .with_lookup(config.lookup.clone());

        Self::with_vocabulary(tokenizer, Arc::new(vocabulary), config)
    }

    /// Create a component around an existing vocabulary.
    ///
    /// The vocabulary's own lookup table is used; `config.lookup` and the
    /// vocabulary-related options are ignored. The remaining options are
    /// validated as in [`new`](Self::new), and an empty vocabulary is a
    /// configuration error.
    pub fn with_vocabulary(
        tokenizer: Arc<dyn Tokenizer>,
        vocabulary: Arc<PhraseVocabulary>,
        config: EmoticonConfig,
    ) -> Result<Self> {
        config.validate()?;
        if vocabulary.is_empty() {
            return Err(EmoticonError::config("vocabulary has no phrases"));
        }

        let matcher = PhraseMatcher::new(vocabulary, &config.pattern_id);
        let annotator = Annotator::new(config.merge_spans);
        Ok(EmoticonComponent {
            tokenizer,
            config,
            matcher,
            annotator,
        })
    }

    /// The configuration the component was built with.
    pub fn config(&self) -> &EmoticonConfig {
        &self.config
    }

    /// The shared vocabulary.
    pub fn vocabulary(&self) -> &Arc<PhraseVocabulary> {
        self.matcher.vocabulary()
    }

    /// The tokenizer used for the vocabulary and by [`analyze`](Self::analyze).
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Matching stage only: the matches of one scan, without side effects.
    pub fn matches(&self, sequence: &TokenSequence) -> Vec<Match> {
        self.matcher.find_matches(sequence)
    }

    /// Match and annotate `sequence` in place.
    pub fn process_in_place(&self, sequence: &mut TokenSequence) -> Result<()> {
        let matches = self.matcher.find_matches(sequence);
        debug!(
            "{}: {} matches in {} tokens",
            self.config.pattern_id,
            matches.len(),
            sequence.len()
        );
        self.annotator
            .annotate(sequence, &matches, self.matcher.vocabulary())
    }

    /// Tokenize `text` with the component's tokenizer and process it.
    pub fn analyze(&self, text: &str) -> Result<TokenSequence> {
        let sequence = TokenSequence::from_text(text, self.tokenizer.as_ref())?;
        self.process(sequence)
    }

    /// Process independent sequences in parallel.
    ///
    /// Results keep the input order. The first error aborts the batch.
    pub fn process_batch(&self, sequences: Vec<TokenSequence>) -> Result<Vec<TokenSequence>> {
        sequences
            .into_par_iter()
            .map(|sequence| self.process(sequence))
            .collect()
    }

    /// A JSON report of `sequence`, keyed by the configured attribute names.
    ///
    /// Tagged tokens also carry the vocabulary entry they matched.
    ///
    /// ```json
    /// {
    ///   "_emoticon": [[":)", 4]],
    ///   "has_emoticon": true,
    ///   "tokens": [{"text": ":)", "is_emoticon": true, "phrase": ":)", "annotation": "happy"}]
    /// }
    /// ```
    pub fn report(&self, sequence: &TokenSequence) -> Value {
        let attrs = &self.config.attrs;

        let tokens: Vec<Value> = sequence
            .tokens()
            .iter()
            .map(|token| {
                let mut entry = Map::new();
                entry.insert("text".to_string(), json!(token.text));
                entry.insert(attrs.is_emoticon.clone(), json!(token.is_emoticon()));
                if let Some(phrase) = token.attribute(PHRASE_ATTRIBUTE) {
                    entry.insert(PHRASE_ATTRIBUTE.to_string(), json!(phrase));
                }
                if let Some(annotation) = token.annotation() {
                    entry.insert("annotation".to_string(), json!(annotation));
                }
                Value::Object(entry)
            })
            .collect();

        let mut report = Map::new();
        report.insert(attrs.index.clone(), json!(sequence.emoticons()));
        report.insert("has_emoticon".to_string(), json!(sequence.has_emoticon()));
        report.insert("tokens".to_string(), Value::Array(tokens));
        Value::Object(report)
    }
}

impl Component for EmoticonComponent {
    fn process(&self, mut sequence: TokenSequence) -> Result<TokenSequence> {
        self.process_in_place(&mut sequence)?;
        Ok(sequence)
    }

    fn name(&self) -> &'static str {
        "emoticon"
    }
}
