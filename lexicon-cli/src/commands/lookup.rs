//! Dictionary lookup command

use anyhow::{Context, Result};
use clap::Parser;

use lexicon_lookup::{meanings, LookupClient, LookupEntry};

/// Arguments for the lookup command
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Word to look up
    pub word: String,

    /// Print the raw entries as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_lookup(args: LookupArgs) -> Result<()> {
    let client = LookupClient::from_env();
    let entries = client
        .lookup(&args.word)
        .await
        .with_context(|| format!("Lookup failed for '{}'", args.word))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render(&entries));
    }
    Ok(())
}

/// Numbered plain-text listing; numbers match `save --meaning/--sense`.
///
/// Meanings are numbered across all entries, so a word with several
/// entries keeps counting up instead of restarting at 1.
pub fn render(entries: &[LookupEntry]) -> String {
    let mut out = String::new();
    let mut current: Option<&LookupEntry> = None;

    for (m, (entry, meaning)) in meanings(entries).enumerate() {
        if !current.is_some_and(|c| std::ptr::eq(c, entry)) {
            current = Some(entry);
            if !out.is_empty() {
                out.push('\n');
            }
            match &entry.phonetic {
                Some(p) => out.push_str(&format!("{} {}\n", entry.word, p)),
                None => out.push_str(&format!("{}\n", entry.word)),
            }
        }

        out.push_str(&format!("\n{}. {}\n", m + 1, meaning.part_of_speech));
        for (s, sense) in meaning.definitions.iter().enumerate() {
            out.push_str(&format!("   {}. {}\n", s + 1, sense.definition));
            if let Some(example) = &sense.example {
                out.push_str(&format!("      \"{}\"\n", example));
            }
        }
        if !meaning.synonyms.is_empty() {
            out.push_str(&format!("   synonyms: {}\n", meaning.synonyms.join(", ")));
        }
        if !meaning.antonyms.is_empty() {
            out.push_str(&format!("   antonyms: {}\n", meaning.antonyms.join(", ")));
        }
    }
    out
}
