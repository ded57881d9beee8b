//! Save command: look a word up and store one sense
//!
//! Talks to a running `lexicon serve` over HTTP.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use reqwest::StatusCode;
use serde::Deserialize;

use lexicon_lookup::{select_sense, LookupClient};
use lexicon_server::models::WordEntry;

/// Arguments for the save command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Word to look up and save
    pub word: String,

    /// Meaning number as listed by `lookup`
    #[arg(long, short = 'm', default_value_t = 1)]
    pub meaning: usize,

    /// Sense number within the meaning
    #[arg(long, short = 's', default_value_t = 1)]
    pub sense: usize,

    /// Word store base URL
    #[arg(long, env = "LEXICON_SERVER_URL", default_value = "http://127.0.0.1:3030")]
    pub server: String,
}

/// Result of a save attempt
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(WordEntry),
    AlreadySaved { word: String },
}

#[derive(Deserialize)]
struct Created {
    data: WordEntry,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub async fn run_save(args: SaveArgs) -> Result<()> {
    let lookup = LookupClient::from_env();
    let http = reqwest::Client::new();

    match save_word(&lookup, &http, &args.server, &args.word, args.meaning, args.sense).await? {
        SaveOutcome::Saved(entry) => {
            println!("Saved '{}' ({})", entry.word, entry.id);
        }
        SaveOutcome::AlreadySaved { word } => {
            println!("'{}' is already saved", word);
        }
    }
    Ok(())
}

/// Look up `word`, pick the 1-based `meaning`/`sense`, and POST it.
pub async fn save_word(
    lookup: &LookupClient,
    http: &reqwest::Client,
    server: &str,
    word: &str,
    meaning: usize,
    sense: usize,
) -> Result<SaveOutcome> {
    let entries = lookup
        .lookup(word)
        .await
        .with_context(|| format!("Lookup failed for '{}'", word))?;

    let choice = meaning
        .checked_sub(1)
        .zip(sense.checked_sub(1))
        .and_then(|(m, s)| select_sense(&entries, m, s))
        .ok_or_else(|| anyhow!("'{}' has no sense {}.{}", word, meaning, sense))?;

    let payload = choice.into_payload();
    let url = format!("{}/words", server.trim_end_matches('/'));
    tracing::debug!(%url, word = %payload.word, "Saving word");

    let response = http
        .post(&url)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("Could not reach word store at {}", server))?;

    match response.status() {
        StatusCode::CREATED => {
            let created: Created = response.json().await.context("Unexpected create response")?;
            Ok(SaveOutcome::Saved(created.data))
        }
        StatusCode::CONFLICT => Ok(SaveOutcome::AlreadySaved { word: payload.word }),
        status => {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_else(|_| "no details".to_string());
            bail!("Word store returned {}: {}", status, message)
        }
    }
}
