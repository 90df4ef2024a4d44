//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{EmoticonArgs, OutputFormat};
use crate::emoticon::EmoticonComponent;
use crate::error::Result;

/// Result structure for tagging.
#[derive(Debug, Serialize, Deserialize)]
pub struct TagResult {
    pub documents: Vec<TaggedDocument>,
}

/// One tagged input text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaggedDocument {
    pub text: String,
    pub report: Value,
}

/// Result structure for vocabulary listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabResult {
    pub tokenizer: String,
    pub phrases: Vec<VocabEntry>,
}

/// One vocabulary phrase.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabEntry {
    pub emoticon: String,
    pub tokens: Vec<String>,
    pub annotation: Option<String>,
}

/// Print a tagging result in the selected format.
pub fn output_tag_result(
    result: &TagResult,
    component: &EmoticonComponent,
    args: &EmoticonArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            print!("{}", format_tag_result_human(result, component, args.verbosity()));
            Ok(())
        }
    }
}

/// Print a vocabulary listing in the selected format.
pub fn output_vocab_result(result: &VocabResult, args: &EmoticonArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            print!("{}", format_vocab_result_human(result, args.verbosity()));
            Ok(())
        }
    }
}

/// Render a tagging result for a terminal.
pub fn format_tag_result_human(
    result: &TagResult,
    component: &EmoticonComponent,
    verbosity: u8,
) -> String {
    let index_attr = &component.config().attrs.index;
    let mut out = String::new();

    for document in &result.documents {
        let entries = document.report[index_attr.as_str()]
            .as_array()
            .cloned()
            .unwrap_or_default();

        if verbosity > 0 {
            out.push_str(&format!("{}\n", document.text));
        }
        if entries.is_empty() {
            out.push_str("  (no emoticons)\n");
        }
        for entry in entries {
            let text = entry[0].as_str().unwrap_or_default();
            let index = entry[1].as_u64().unwrap_or_default();
            let annotation = document.report["tokens"][index as usize]["annotation"].as_str();
            match annotation {
                Some(annotation) => out.push_str(&format!("  {index:>4}  {text}  ({annotation})\n")),
                None => out.push_str(&format!("  {index:>4}  {text}\n")),
            }
        }
    }

    out
}

/// Render a vocabulary listing for a terminal.
pub fn format_vocab_result_human(result: &VocabResult, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity > 0 {
        out.push_str(&format!(
            "{} phrases (tokenizer: {})\n",
            result.phrases.len(),
            result.tokenizer
        ));
    }
    for phrase in &result.phrases {
        out.push_str(&format!("{:<16} {}", phrase.emoticon, phrase.tokens.join(" | ")));
        if let Some(annotation) = &phrase.annotation {
            out.push_str(&format!("  ({annotation})"));
        }
        out.push('\n');
    }
    out
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EmoticonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
