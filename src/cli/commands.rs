//! Command implementations for the emoticon CLI.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};

use crate::analysis::component::Component;
use crate::analysis::sequence::TokenSequence;
use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::emoticon::{EmoticonComponent, EmoticonConfig, load_lookup};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: EmoticonArgs) -> anyhow::Result<()> {
    match &args.command {
        Command::Tag(tag_args) => tag_text(tag_args.clone(), &args),
        Command::Vocab(vocab_args) => list_vocabulary(vocab_args.clone(), &args),
    }
}

/// Create the tokenizer selected on the command line.
///
/// A custom `--pattern` takes precedence over `--tokenizer`.
pub fn make_tokenizer(args: &ComponentArgs) -> anyhow::Result<Arc<dyn Tokenizer>> {
    if let Some(pattern) = &args.pattern {
        let tokenizer = RegexTokenizer::with_pattern(pattern)
            .with_context(|| format!("invalid --pattern {pattern:?}"))?;
        return Ok(Arc::new(tokenizer));
    }

    Ok(match args.tokenizer {
        TokenizerKind::Unicode => Arc::new(UnicodeWordTokenizer::new()),
        TokenizerKind::Punctuation => Arc::new(RegexTokenizer::punctuation()),
        TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
    })
}

/// Build the component from the config file, lookup file and flags.
///
/// Flags override the config file; lookup file entries are added on top of
/// the config's lookup table.
pub fn build_component(
    args: &ComponentArgs,
    merge_override: Option<bool>,
) -> anyhow::Result<EmoticonComponent> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            EmoticonConfig::from_file(path)
                .with_context(|| format!("cannot load config {}", path.display()))?
        }
        None => EmoticonConfig::default(),
    };

    if let Some(path) = &args.lookup {
        info!("Loading lookup table from: {}", path.display());
        let lookup = load_lookup(path)
            .with_context(|| format!("cannot load lookup table {}", path.display()))?;
        config.lookup.extend(lookup);
    }
    config.extra_emoticons.extend(args.extra.iter().cloned());
    if let Some(merge_spans) = merge_override {
        config.merge_spans = merge_spans;
    }

    let tokenizer = make_tokenizer(args)?;
    debug!("Using tokenizer '{}'", tokenizer.name());
    let component = EmoticonComponent::new(tokenizer, config)
        .context("cannot build the emoticon vocabulary")?;
    Ok(component)
}

/// Read one document per stdin line.
fn read_documents() -> Result<Vec<String>> {
    let lines = io::stdin().lock().lines().collect::<io::Result<_>>()?;
    Ok(lines)
}

/// Tag the given text, or every stdin line.
fn tag_text(args: TagArgs, cli_args: &EmoticonArgs) -> anyhow::Result<()> {
    let merge_override = if args.no_merge { Some(false) } else { None };
    let component = build_component(&args.component, merge_override)?;

    let texts: Vec<String> = match args.text {
        Some(text) => vec![text],
        None => read_documents().context("cannot read documents from stdin")?,
    };

    let tokenizer = component.tokenizer();
    let sequences = texts
        .iter()
        .map(|text| TokenSequence::from_text(text, tokenizer.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let documents = if sequences.len() > 1 {
        component.process_batch(sequences)?
    } else {
        sequences
            .into_iter()
            .map(|sequence| component.process(sequence))
            .collect::<Result<Vec<_>>>()?
    };

    let result = TagResult {
        documents: documents
            .iter()
            .zip(&texts)
            .map(|(doc, text)| TaggedDocument {
                text: text.clone(),
                report: component.report(doc),
            })
            .collect(),
    };

    output_tag_result(&result, &component, cli_args)?;
    Ok(())
}

/// The vocabulary phrases of `component`, with their lookup annotations.
///
/// Annotations are resolved by the emoticon as registered. Matched text is
/// annotated under its own surface text, so an emoticon matched with
/// different inter-token spacing is not annotated even if its entry is.
fn vocabulary_entries(component: &EmoticonComponent, multi_token: bool) -> Vec<VocabEntry> {
    let vocabulary = component.vocabulary();
    vocabulary
        .phrases()
        .iter()
        .filter(|phrase| !multi_token || phrase.len() > 1)
        .map(|phrase| VocabEntry {
            emoticon: phrase.source().to_string(),
            tokens: phrase.tokens().to_vec(),
            annotation: vocabulary.annotation(phrase.source()).map(str::to_string),
        })
        .collect()
}

/// List the vocabulary phrases.
fn list_vocabulary(args: VocabArgs, cli_args: &EmoticonArgs) -> anyhow::Result<()> {
    let component = build_component(&args.component, None)?;

    let result = VocabResult {
        tokenizer: component.tokenizer().name().to_string(),
        phrases: vocabulary_entries(&component, args.multi_token),
    };

    output_vocab_result(&result, cli_args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::emoticon::PHRASE_ATTRIBUTE;

    fn component_args(tokenizer: TokenizerKind) -> ComponentArgs {
        ComponentArgs {
            tokenizer,
            pattern: None,
            config: None,
            lookup: None,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_build_component_defaults() {
        let component = build_component(&component_args(TokenizerKind::Punctuation), None).unwrap();
        assert!(component.config().merge_spans);
        assert_eq!(component.tokenizer().name(), "regex");
    }

    #[test]
    fn test_build_component_overrides() {
        let mut lookup = tempfile::NamedTempFile::new().unwrap();
        write!(lookup, r#"{{":)": "happy"}}"#).unwrap();

        let mut args = component_args(TokenizerKind::Whitespace);
        args.lookup = Some(lookup.path().to_path_buf());
        args.extra = vec!["(y)".to_string()];

        let component = build_component(&args, Some(false)).unwrap();
        assert!(!component.config().merge_spans);
        assert_eq!(component.vocabulary().annotation(":)"), Some("happy"));

        let doc = component.analyze("thumbs (y)").unwrap();
        assert!(doc.is_emoticon(1).unwrap());
    }

    #[test]
    fn test_build_component_missing_config() {
        let mut args = component_args(TokenizerKind::Unicode);
        args.config = Some("/nonexistent/config.json".into());

        let error = build_component(&args, None).err().unwrap();
        assert!(error.to_string().contains("/nonexistent/config.json"));
    }

    #[test]
    fn test_custom_pattern() {
        let mut args = component_args(TokenizerKind::Unicode);
        args.pattern = Some(r"\S+".to_string());

        let component = build_component(&args, None).unwrap();
        let doc = component.analyze("hi :) there").unwrap();
        assert_eq!(doc.emoticons(), vec![(":)".to_string(), 1)]);

        args.pattern = Some("(".to_string());
        assert!(build_component(&args, None).is_err());
    }

    #[test]
    fn test_vocabulary_entries() {
        let args = component_args(TokenizerKind::Punctuation);
        let component = build_component(&args, None).unwrap();

        let all = vocabulary_entries(&component, false);
        let multi = vocabulary_entries(&component, true);
        assert_eq!(all.len(), component.vocabulary().len());
        assert!(multi.len() < all.len());
        assert!(multi.iter().all(|entry| entry.tokens.len() > 1));
    }

    #[test]
    fn test_vocabulary_annotation_keyed_by_registered_text() {
        let mut lookup = tempfile::NamedTempFile::new().unwrap();
        write!(lookup, r#"{{":- >": "smirk"}}"#).unwrap();

        let mut args = component_args(TokenizerKind::Whitespace);
        args.lookup = Some(lookup.path().to_path_buf());
        let component = build_component(&args, None).unwrap();

        let entry = vocabulary_entries(&component, true)
            .into_iter()
            .find(|entry| entry.emoticon == ":- >")
            .unwrap();
        assert_eq!(entry.annotation.as_deref(), Some("smirk"));

        // same phrase, wider spacing: tagged but looked up as ":-   >"
        let doc = component.analyze("a :-   > b").unwrap();
        let token = doc.token(1).unwrap();
        assert!(token.is_emoticon());
        assert_eq!(token.text, ":-   >");
        assert_eq!(token.annotation(), None);
        assert_eq!(token.attribute(PHRASE_ATTRIBUTE), Some(":- >"));

        let doc = component.analyze("a :- > b").unwrap();
        assert_eq!(doc.annotation(1).unwrap(), Some("smirk"));
    }
}
