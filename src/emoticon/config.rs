//! Configuration for the emoticon component.
//!
//! # Example
//!
//! ```
//! use emoticon::emoticon::EmoticonConfig;
//!
//! let config = EmoticonConfig::builder()
//!     .merge_spans(false)
//!     .lookup_entry(":)", "happy")
//!     .pattern_id("SMILEY")
//!     .build();
//!
//! assert!(!config.merge_spans);
//! assert_eq!(config.lookup.get(":)").map(String::as_str), Some("happy"));
//! assert_eq!(config.attrs.is_emoticon, "is_emoticon");
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EmoticonError, Result};

use super::vocabulary::{EmptyPhrasePolicy, load_lookup};

/// Default identifier attached to matches.
pub const DEFAULT_PATTERN_ID: &str = "EMOTICON";

/// Names under which the tag and the index are exposed in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoticonAttrs {
    /// Name of the per-token boolean tag
    pub is_emoticon: String,
    /// Name of the `(text, index)` list
    pub index: String,
}

impl Default for EmoticonAttrs {
    fn default() -> Self {
        EmoticonAttrs {
            is_emoticon: "is_emoticon".to_string(),
            index: "_emoticon".to_string(),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for EmoticonAttrs {
    fn from((is_emoticon, index): (A, B)) -> Self {
        EmoticonAttrs {
            is_emoticon: is_emoticon.into(),
            index: index.into(),
        }
    }
}

/// Constructor-time options of the emoticon component.
///
/// Every field has a default, so a JSON config file only needs the fields
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmoticonConfig {
    /// Collapse multi-token matches into one token
    pub merge_spans: bool,

    /// Emoticon text -> custom annotation
    pub lookup: HashMap<String, String>,

    /// Identifier attached to every match
    pub pattern_id: String,

    /// Names for the tag and the index in reports
    pub attrs: EmoticonAttrs,

    /// Emoticons registered after the base list
    pub extra_emoticons: Vec<String>,

    /// Register the built-in base emoticons
    pub include_base: bool,

    /// Handling of entries that tokenize to nothing
    pub empty_phrase_policy: EmptyPhrasePolicy,
}

impl Default for EmoticonConfig {
    fn default() -> Self {
        EmoticonConfig {
            merge_spans: true,
            lookup: HashMap::new(),
            pattern_id: DEFAULT_PATTERN_ID.to_string(),
            attrs: EmoticonAttrs::default(),
            extra_emoticons: Vec::new(),
            include_base: true,
            empty_phrase_policy: EmptyPhrasePolicy::default(),
        }
    }
}

impl EmoticonConfig {
    /// Create a new builder starting from the defaults.
    pub fn builder() -> EmoticonConfigBuilder {
        EmoticonConfigBuilder::new()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EmoticonError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: EmoticonConfig = serde_json::from_str(&content).map_err(|e| {
            EmoticonError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check option values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.pattern_id.is_empty() {
            return Err(EmoticonError::config("pattern_id must not be empty"));
        }
        if self.attrs.is_emoticon.is_empty() || self.attrs.index.is_empty() {
            return Err(EmoticonError::config("attribute names must not be empty"));
        }
        if self.attrs.is_emoticon == self.attrs.index {
            return Err(EmoticonError::config(format!(
                "attribute names must differ, both are {:?}",
                self.attrs.index
            )));
        }
        if !self.include_base && self.extra_emoticons.is_empty() {
            return Err(EmoticonError::config(
                "vocabulary is empty: base emoticons disabled and no extra emoticons given",
            ));
        }
        Ok(())
    }

    /// The base list (if enabled) followed by the extra emoticons.
    pub fn emoticons(&self) -> Vec<&str> {
        let base: &[&str] = if self.include_base {
            super::vocabulary::BASE_EMOTICONS
        } else {
            &[]
        };
        base.iter()
            .copied()
            .chain(self.extra_emoticons.iter().map(String::as_str))
            .collect()
    }
}

/// Builder for [`EmoticonConfig`].
#[derive(Debug, Clone, Default)]
pub struct EmoticonConfigBuilder {
    config: EmoticonConfig,
}

impl EmoticonConfigBuilder {
    /// Create a builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set merge mode.
    pub fn merge_spans(mut self, merge_spans: bool) -> Self {
        self.config.merge_spans = merge_spans;
        self
    }

    /// Replace the lookup table.
    pub fn lookup(mut self, lookup: HashMap<String, String>) -> Self {
        self.config.lookup = lookup;
        self
    }

    /// Add one lookup entry.
    pub fn lookup_entry<K: Into<String>, V: Into<String>>(mut self, text: K, annotation: V) -> Self {
        self.config.lookup.insert(text.into(), annotation.into());
        self
    }

    /// Merge the entries of a JSON lookup file into the table.
    pub fn lookup_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config.lookup.extend(load_lookup(path)?);
        Ok(self)
    }

    /// Set the match identifier.
    pub fn pattern_id<S: Into<String>>(mut self, pattern_id: S) -> Self {
        self.config.pattern_id = pattern_id.into();
        self
    }

    /// Set the tag and index attribute names.
    pub fn attrs<A: Into<EmoticonAttrs>>(mut self, attrs: A) -> Self {
        self.config.attrs = attrs.into();
        self
    }

    /// Register an extra emoticon.
    pub fn extra_emoticon<S: Into<String>>(mut self, emoticon: S) -> Self {
        self.config.extra_emoticons.push(emoticon.into());
        self
    }

    /// Whether to register the base emoticons.
    pub fn include_base(mut self, include_base: bool) -> Self {
        self.config.include_base = include_base;
        self
    }

    /// Set the policy for entries that tokenize to nothing.
    pub fn empty_phrase_policy(mut self, policy: EmptyPhrasePolicy) -> Self {
        self.config.empty_phrase_policy = policy;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EmoticonConfig {
        self.config
    }
}
