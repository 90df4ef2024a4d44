//! Text analysis module.
//!
//! This module provides the host side of emoticon detection: tokens,
//! tokenizers, token sequences, and a pipeline that runs sequence-level
//! components after tokenization.

pub mod component;
pub mod pipeline;
pub mod sequence;
pub mod token;
pub mod tokenizer;
