//! Lookup service response types

use serde::{Deserialize, Serialize};

/// One headword returned by the lookup service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LookupEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Senses grouped under one part of speech
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Sense>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single definition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Error body the service returns for unknown words
#[derive(Debug, Deserialize)]
pub(crate) struct NotFoundBody {
    pub title: String,
}
