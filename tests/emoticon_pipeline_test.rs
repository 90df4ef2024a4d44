//! Integration tests for emoticon detection through the analysis pipeline

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use emoticon::emoticon::{EmptyPhrasePolicy, PhraseMatcher, PhraseVocabulary, load_lookup};
use emoticon::prelude::*;
use tempfile::NamedTempFile;

/// Drops every token that is not tagged as an emoticon.
struct EmoticonsOnly;

impl Component for EmoticonsOnly {
    fn process(&self, sequence: TokenSequence) -> Result<TokenSequence> {
        let tokens = sequence
            .into_tokens()
            .into_iter()
            .filter(Token::is_emoticon)
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect::<Vec<_>>();
        Ok(TokenSequence::new(tokens))
    }

    fn name(&self) -> &'static str {
        "emoticons_only"
    }
}

fn emoticon_pipeline(config: EmoticonConfig) -> Result<Pipeline> {
    let tokenizer: Arc<dyn Tokenizer> = Arc::new(UnicodeWordTokenizer::new());
    let component = EmoticonComponent::new(Arc::clone(&tokenizer), config)?;
    Ok(Pipeline::new(tokenizer).add_component(Arc::new(component)))
}

#[test]
fn test_default_pipeline_merges_emoticons() -> Result<()> {
    let pipeline = emoticon_pipeline(EmoticonConfig::default())?;
    let doc = pipeline.run("This is a test :) :(")?;

    assert_eq!(doc.len(), 6);
    assert_eq!(doc.token(4)?.text, ":)");
    assert_eq!(doc.token(5)?.text, ":(");
    assert!(doc.is_emoticon(4)?);
    assert!(doc.is_emoticon(5)?);
    assert!(!doc.is_emoticon(0)?);
    assert!(doc.has_emoticon());
    assert_eq!(
        doc.emoticons(),
        vec![(":)".to_string(), 4), (":(".to_string(), 5)]
    );

    // Merged tokens cover the source characters
    let text = doc.text().unwrap();
    let smile = doc.token(4)?;
    assert_eq!(&text[smile.start_offset..smile.end_offset], ":)");

    Ok(())
}

#[test]
fn test_pipeline_without_merge() -> Result<()> {
    let pipeline = emoticon_pipeline(EmoticonConfig::builder().merge_spans(false).build())?;
    let doc = pipeline.run("This is a test :) :(")?;

    assert_eq!(doc.len(), 8);
    let tagged: Vec<usize> = doc.emoticons().into_iter().map(|(_, i)| i).collect();
    assert_eq!(tagged, vec![4, 5, 6, 7]);

    let span = doc.span(4, 8)?;
    assert!(span.has_emoticon());
    assert_eq!(span.emoticons().first(), Some(&(":".to_string(), 0)));

    Ok(())
}

#[test]
fn test_lookup_annotations() -> Result<()> {
    let pipeline = emoticon_pipeline(
        EmoticonConfig::builder()
            .lookup_entry(":)", "happy")
            .lookup_entry(":(", "sad")
            .build(),
    )?;
    let doc = pipeline.run("good :) bad :( meh :/")?;

    let annotations: Vec<Option<&str>> = doc
        .tokens()
        .iter()
        .filter(|t| t.is_emoticon())
        .map(Token::annotation)
        .collect();
    assert_eq!(annotations, vec![Some("happy"), Some("sad"), None]);
    assert_eq!(doc.annotation(0)?, None);

    Ok(())
}

#[test]
fn test_config_file_with_lookup_file() -> Result<()> {
    let mut lookup = NamedTempFile::new().unwrap();
    write!(lookup, r#"{{"<3": "love"}}"#).unwrap();

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{"merge_spans": false, "include_base": false, "extra_emoticons": ["(y)", "<3"], "lookup": {{"(y)": "ok"}}}}"#
    )
    .unwrap();

    let mut config = EmoticonConfig::from_file(config_file.path())?;
    config.lookup.extend(load_lookup(lookup.path())?);

    let pipeline = emoticon_pipeline(config)?;
    let doc = pipeline.run("(y) <3 :)")?;

    // no merge: "(y)" stays three tokens, "<3" two; ":)" is not registered
    assert_eq!(doc.len(), 7);
    let tagged: Vec<usize> = doc.emoticons().into_iter().map(|(_, i)| i).collect();
    assert_eq!(tagged, vec![0, 1, 2, 3, 4]);
    assert_eq!(doc.annotation(1)?, Some("ok"));
    assert_eq!(doc.annotation(4)?, Some("love"));
    assert!(!doc.is_emoticon(5)?);

    Ok(())
}

#[test]
fn test_downstream_component_sees_tags() -> Result<()> {
    let pipeline = emoticon_pipeline(EmoticonConfig::default())?.add_component(Arc::new(EmoticonsOnly));
    let doc = pipeline.run("so :-( but then ^_^ and <3")?;

    let texts: Vec<&str> = doc.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![":-(", "^_^", "<3"]);
    assert!(doc.tokens().iter().enumerate().all(|(i, t)| t.position == i));

    Ok(())
}

#[test]
fn test_reprocessing_keeps_index_stable() -> Result<()> {
    let tokenizer = Arc::new(RegexTokenizer::punctuation());
    let component = EmoticonComponent::new(tokenizer, EmoticonConfig::default())?;

    let first = component.analyze("This is a test :) :(")?;
    let second = component.process(first.clone())?;

    assert_eq!(first.emoticons(), second.emoticons());
    assert_eq!(first.len(), second.len());

    Ok(())
}

#[test]
fn test_matching_stage_alone_has_no_side_effects() -> Result<()> {
    let tokenizer = WhitespaceTokenizer::new();
    let vocabulary = Arc::new(
        PhraseVocabulary::new([":- >", ":-"], &tokenizer, EmptyPhrasePolicy::Error)?
            .with_lookup(HashMap::from([(":- >".to_string(), "smirk".to_string())])),
    );
    let matcher = PhraseMatcher::new(vocabulary, "EMOTICON");

    let doc = TokenSequence::from_text("well :- > then :-", &tokenizer)?;
    let before = doc.clone();
    let matches = matcher.find_matches(&doc);

    let spans: Vec<(usize, usize)> = matches.iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(spans, vec![(1, 3), (4, 5)]);
    assert_eq!(doc, before);
    assert!(!doc.has_emoticon());

    Ok(())
}

#[test]
fn test_batch_processing_keeps_order() -> Result<()> {
    let tokenizer = Arc::new(UnicodeWordTokenizer::new());
    let component = EmoticonComponent::new(tokenizer.clone(), EmoticonConfig::default())?;

    let texts: Vec<String> = (0..64)
        .map(|i| if i % 3 == 0 { format!("doc {i} :)") } else { format!("doc {i}") })
        .collect();
    let docs = texts
        .iter()
        .map(|t| TokenSequence::from_text(t, tokenizer.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let processed = component.process_batch(docs)?;
    assert_eq!(processed.len(), texts.len());
    for (i, doc) in processed.iter().enumerate() {
        assert_eq!(doc.text(), Some(texts[i].as_str()));
        assert_eq!(doc.has_emoticon(), i % 3 == 0);
    }

    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EmoticonConfig::builder().include_base(false).build();
    assert!(matches!(
        emoticon_pipeline(config),
        Err(EmoticonError::Config(_))
    ));
}
