//! Pipeline that combines a tokenizer with sequence components.
//!
//! The pipeline tokenizes raw text into a [`TokenSequence`] that keeps the
//! source text, then applies its components in the order they were added.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use emoticon::analysis::pipeline::Pipeline;
//! use emoticon::analysis::tokenizer::RegexTokenizer;
//! use emoticon::emoticon::{EmoticonComponent, EmoticonConfig};
//!
//! let tokenizer = Arc::new(RegexTokenizer::punctuation());
//! let component = EmoticonComponent::new(tokenizer.clone(), EmoticonConfig::default()).unwrap();
//! let pipeline = Pipeline::new(tokenizer).add_component(Arc::new(component));
//!
//! let doc = pipeline.run("This is a test :) :(").unwrap();
//! assert!(doc.has_emoticon());
//! assert_eq!(doc.len(), 6);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::component::Component;
use crate::analysis::sequence::TokenSequence;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer followed by a chain of components.
#[derive(Clone)]
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    components: Vec<Arc<dyn Component>>,
    name: String,
}

impl Pipeline {
    /// Create a new pipeline with the given tokenizer and no components.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Pipeline {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            components: Vec::new(),
        }
    }

    /// Append a component to the pipeline.
    pub fn add_component(mut self, component: Arc<dyn Component>) -> Self {
        self.components.push(component);
        self
    }

    /// Set a custom name for this pipeline.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the pipeline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the components, in application order.
    pub fn components(&self) -> &[Arc<dyn Component>] {
        &self.components
    }

    /// Tokenize `text` and run every component over the result.
    pub fn run(&self, text: &str) -> Result<TokenSequence> {
        let sequence = TokenSequence::from_text(text, self.tokenizer.as_ref())?;
        self.apply(sequence)
    }

    /// Run every component over an existing sequence.
    pub fn apply(&self, mut sequence: TokenSequence) -> Result<TokenSequence> {
        for component in &self.components {
            debug!(
                "{}: applying '{}' to {} tokens",
                self.name,
                component.name(),
                sequence.len()
            );
            sequence = component.process(sequence)?;
        }
        Ok(sequence)
    }
}
