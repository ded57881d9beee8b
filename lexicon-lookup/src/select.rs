//! Sense selection
//!
//! Picks one definition out of a lookup result and shapes it into the
//! body the word store's `POST /words` accepts.

use serde::Serialize;

use crate::entry::{LookupEntry, Meaning};

/// A chosen definition with its context
#[derive(Debug, Clone, PartialEq)]
pub struct SenseChoice {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Create body for the word store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavePayload {
    pub word: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Every meaning across all entries, in response order, with its entry.
///
/// `meaning` indices used by `select_sense` count through this sequence.
pub fn meanings(entries: &[LookupEntry]) -> impl Iterator<Item = (&LookupEntry, &Meaning)> {
    entries
        .iter()
        .flat_map(|entry| entry.meanings.iter().map(move |m| (entry, m)))
}

/// Choose sense `sense` of meaning `meaning`.
///
/// Meanings are numbered across all entries (see [`meanings`]).
/// Synonyms and antonyms are the sense's own followed by its meaning's.
/// Returns `None` when either index is out of range.
pub fn select_sense(entries: &[LookupEntry], meaning: usize, sense: usize) -> Option<SenseChoice> {
    let (entry, m) = meanings(entries).nth(meaning)?;
    let s = m.definitions.get(sense)?;

    Some(SenseChoice {
        word: entry.word.clone(),
        part_of_speech: m.part_of_speech.clone(),
        definition: s.definition.clone(),
        example: s.example.clone().filter(|e| !e.trim().is_empty()),
        synonyms: s.synonyms.iter().chain(&m.synonyms).cloned().collect(),
        antonyms: s.antonyms.iter().chain(&m.antonyms).cloned().collect(),
    })
}

impl SenseChoice {
    pub fn into_payload(self) -> SavePayload {
        SavePayload {
            word: self.word,
            definition: self.definition,
            example: self.example,
            synonyms: self.synonyms,
            antonyms: self.antonyms,
        }
    }
}
