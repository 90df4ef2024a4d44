//! Emoticon phrase vocabulary.
//!
//! Each vocabulary entry is an emoticon string tokenized with the host
//! tokenizer into a [`Phrase`]. The vocabulary also holds the read-only
//! lookup table that maps emoticon texts to custom annotations.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{EmoticonError, Result};

/// Built-in text emoticons.
pub const BASE_EMOTICONS: &[&str] = &[
    ":)", ":-)", ":))", ":-))", ":)))", ":-)))", "(:", "(-:", "=)", "(=", ":]", ":-]", "[:",
    "[-:", "[=", "=]", ":o)", "(o:", ":}", ":-}", "8)", "8-)", "(-8", ";)", ";-)", "(;", "(-;",
    ":(", ":-(", ":((", ":-((", ":(((", ":-(((", "):", ")-:", "=(", ">:(", ":')", ":'-)", ":'(",
    ":'-(", ":/", ":-/", "=/", "=|", ":|", ":-|", "]=", "=[", ":1", ":P", ":-P", ":p", ":-p",
    ":O", ":-O", ":o", ":-o", ":0", ":-0", ":()", ">:o", ":*", ":-*", ":3", ":-3", "=3", ":>",
    ":- >", ":X", ":-X", ":x", ":-x", ":D", ":-D", ";D", ";-D", "=D", "xD", "XD", "xDD", "XDD",
    "8D", "8-D", "^_^", "^__^", "^___^", ">.<", ">.>", "<.<", "._.", ";_;", "-_-", "-__-",
    "v.v", "V.V", "v_v", "V_V", "o_o", "o_O", "O_o", "O_O", "0_o", "o_0", "0_0", "o.O", "O.o",
    "O.O", "o.o", "0.0", "o.0", "0.o", "@_@", "<3", "<33", "<333", "</3", "(^_^)", "(-_-)",
    "(._.)", "(>_<)", "(*_*)", "(¬_¬)", "ಠ_ಠ", "ಠ︵ಠ", "(ಠ_ಠ)", "¯\\(ツ)/¯",
    "(╯°□°）╯︵┻━┻", "><(((*>",
];

/// What to do with a vocabulary entry that tokenizes to zero tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPhrasePolicy {
    /// Fail vocabulary construction with a configuration error.
    #[default]
    Error,
    /// Drop the entry and log a warning.
    Skip,
}

/// One vocabulary entry: an emoticon and its token texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrase {
    source: String,
    tokens: Vec<String>,
}

impl Phrase {
    /// Create a phrase from pre-tokenized surface strings.
    pub fn new<S: Into<String>>(source: S, tokens: Vec<String>) -> Result<Self> {
        let source = source.into();
        if tokens.is_empty() {
            return Err(EmoticonError::config(format!(
                "emoticon {source:?} produced no tokens"
            )));
        }
        Ok(Phrase { source, tokens })
    }

    /// The emoticon string this phrase was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Token texts, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: construction rejects empty phrases.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The first token text, used to index the phrase.
    pub fn first(&self) -> &str {
        &self.tokens[0]
    }
}

/// The fixed set of emoticon phrases plus the annotation lookup table.
///
/// Built once and shared read-only; registration order is kept because it
/// decides ties between equally long phrases.
#[derive(Clone, Debug, Default)]
pub struct PhraseVocabulary {
    phrases: Vec<Phrase>,
    lookup: HashMap<String, String>,
    max_phrase_length: usize,
}

impl PhraseVocabulary {
    /// Tokenize every emoticon with `tokenizer` and collect the phrases.
    ///
    /// Entries that tokenize to nothing fail construction or are dropped,
    /// as selected by `policy`.
    pub fn new<I, S>(emoticons: I, tokenizer: &dyn Tokenizer, policy: EmptyPhrasePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = PhraseVocabulary::default();

        for emoticon in emoticons {
            let emoticon = emoticon.as_ref();
            let tokens: Vec<String> = tokenizer.tokenize(emoticon)?.map(|t| t.text).collect();

            match Phrase::new(emoticon, tokens) {
                Ok(phrase) => vocabulary.push(phrase),
                Err(e) => match policy {
                    EmptyPhrasePolicy::Error => return Err(e),
                    EmptyPhrasePolicy::Skip => {
                        warn!("skipping emoticon {emoticon:?}: tokenizer '{}' produced no tokens", tokenizer.name());
                    }
                },
            }
        }

        debug!(
            "built emoticon vocabulary of {} phrases with tokenizer '{}' (longest: {} tokens)",
            vocabulary.len(),
            tokenizer.name(),
            vocabulary.max_phrase_length
        );

        Ok(vocabulary)
    }

    /// Build a vocabulary from [`BASE_EMOTICONS`].
    pub fn base(tokenizer: &dyn Tokenizer) -> Result<Self> {
        Self::new(BASE_EMOTICONS.iter(), tokenizer, EmptyPhrasePolicy::Error)
    }

    /// Build a vocabulary from already-constructed phrases.
    pub fn from_phrases(phrases: Vec<Phrase>) -> Self {
        let mut vocabulary = PhraseVocabulary::default();
        for phrase in phrases {
            vocabulary.push(phrase);
        }
        vocabulary
    }

    /// Attach the annotation lookup table.
    pub fn with_lookup(mut self, lookup: HashMap<String, String>) -> Self {
        self.lookup = lookup;
        self
    }

    fn push(&mut self, phrase: Phrase) {
        self.max_phrase_length = self.max_phrase_length.max(phrase.len());
        self.phrases.push(phrase);
    }

    /// All phrases in registration order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Get a phrase by registration index.
    pub fn phrase(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Check if the vocabulary has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Token count of the longest phrase.
    pub fn max_phrase_length(&self) -> usize {
        self.max_phrase_length
    }

    /// The lookup table.
    pub fn lookup(&self) -> &HashMap<String, String> {
        &self.lookup
    }

    /// Custom annotation for an emoticon text; `None` when not in the table.
    pub fn annotation(&self, text: &str) -> Option<&str> {
        self.lookup.get(text).map(|s| s.as_str())
    }
}

/// Load a lookup table from a JSON object file.
///
/// Example format:
/// ```json
/// {
///   ":)": "happy",
///   ":(": "sad"
/// }
/// ```
pub fn load_lookup<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        EmoticonError::config(format!(
            "Failed to read lookup file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        EmoticonError::config(format!(
            "Failed to parse lookup JSON from '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::analysis::tokenizer::{RegexTokenizer, WhitespaceTokenizer};

    #[test]
    fn test_vocabulary_with_punctuation_tokenizer() {
        let tokenizer = RegexTokenizer::punctuation();
        let vocab = PhraseVocabulary::new([":)", ":-(", "xD"], &tokenizer, EmptyPhrasePolicy::Error)
            .unwrap();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.phrase(0).unwrap().tokens(), &[":", ")"]);
        assert_eq!(vocab.phrase(1).unwrap().tokens(), &[":", "-", "("]);
        assert_eq!(vocab.phrase(2).unwrap().tokens(), &["xD"]);
        assert_eq!(vocab.phrase(1).unwrap().source(), ":-(");
        assert_eq!(vocab.max_phrase_length(), 3);
    }

    #[test]
    fn test_vocabulary_with_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let vocab = PhraseVocabulary::base(&tokenizer).unwrap();

        assert_eq!(vocab.len(), BASE_EMOTICONS.len());
        // ":- >" is the only base entry containing a space
        assert_eq!(vocab.max_phrase_length(), 2);
    }

    #[test]
    fn test_empty_phrase_is_config_error() {
        let tokenizer = WhitespaceTokenizer::new();
        let result = PhraseVocabulary::new([":)", "   "], &tokenizer, EmptyPhrasePolicy::Error);

        match result {
            Err(EmoticonError::Config(msg)) => assert!(msg.contains("no tokens")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_phrase_skipped() {
        let tokenizer = WhitespaceTokenizer::new();
        let vocab =
            PhraseVocabulary::new([":)", "", ":("], &tokenizer, EmptyPhrasePolicy::Skip).unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.phrase(1).unwrap().source(), ":(");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let tokenizer = WhitespaceTokenizer::new();
        let vocab =
            PhraseVocabulary::new([":)", ":)"], &tokenizer, EmptyPhrasePolicy::Error).unwrap();
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_lookup_annotation() {
        let lookup = HashMap::from([(":)".to_string(), "happy".to_string())]);
        let vocab = PhraseVocabulary::base(&WhitespaceTokenizer::new())
            .unwrap()
            .with_lookup(lookup);

        assert_eq!(vocab.annotation(":)"), Some("happy"));
        assert_eq!(vocab.annotation(":("), None);
    }

    #[test]
    fn test_load_lookup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{":)": "happy", "<3": "love"}}"#).unwrap();

        let lookup = load_lookup(file.path()).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("<3").map(String::as_str), Some("love"));
    }

    #[test]
    fn test_load_lookup_errors() {
        assert!(matches!(
            load_lookup("/nonexistent/lookup.json"),
            Err(EmoticonError::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();
        assert!(matches!(
            load_lookup(file.path()),
            Err(EmoticonError::Config(_))
        ));
    }
}
