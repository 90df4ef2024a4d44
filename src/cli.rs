//! Command line interface for the emoticon tagger.

pub mod args;
pub mod commands;
pub mod output;
