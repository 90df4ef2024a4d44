//! Sequence-level pipeline components.
//!
//! Components run after tokenization and transform a whole
//! [`TokenSequence`]. They see the full sequence rather than a token stream
//! because some of them, like the emoticon component, re-segment the
//! sequence and need its source text to do so.
//!
//! # Examples
//!
//! Implementing a custom component:
//!
//! ```
//! use emoticon::analysis::component::Component;
//! use emoticon::analysis::sequence::TokenSequence;
//! use emoticon::error::Result;
//!
//! struct UppercaseComponent;
//!
//! impl Component for UppercaseComponent {
//!     fn process(&self, mut sequence: TokenSequence) -> Result<TokenSequence> {
//!         for token in sequence.tokens_mut() {
//!             token.text = token.text.to_uppercase();
//!         }
//!         Ok(sequence)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "uppercase"
//!     }
//! }
//! ```

use crate::analysis::sequence::TokenSequence;
use crate::error::Result;

/// Trait for components that transform token sequences.
///
/// A component takes ownership of the sequence it processes, so no other
/// reader can observe it while tokens are being merged. The trait requires
/// `Send + Sync` to allow sharing one component across worker threads.
pub trait Component: Send + Sync {
    /// Apply this component to a sequence, returning the resulting sequence.
    fn process(&self, sequence: TokenSequence) -> Result<TokenSequence>;

    /// Get the name of this component (for debugging and configuration).
    fn name(&self) -> &'static str;
}
