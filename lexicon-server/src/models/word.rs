//! Word entry types
//!
//! `CreateWord`/`UpdateWord` are raw request bodies; `NewWord`/`WordUpdate`
//! are their validated forms. `WordEntry` is a stored document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RequiredText, TermSet, ValidationError};

/// Maximum length for a headword
pub const MAX_WORD_LEN: usize = 128;

/// Maximum length for a definition
pub const MAX_DEFINITION_LEN: usize = 4096;

/// Maximum length for a usage example
pub const MAX_EXAMPLE_LEN: usize = 4096;

/// Maximum length for a single synonym or antonym
pub const MAX_TERM_LEN: usize = 128;

/// Create request body
///
/// Every field is optional at the wire level so that a missing field
/// becomes a validation error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

/// Update request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

/// Validated entry ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub word: RequiredText,
    pub definition: RequiredText,
    pub example: Option<RequiredText>,
    pub synonyms: TermSet,
    pub antonyms: TermSet,
}

impl NewWord {
    /// Validate a create request.
    ///
    /// Fields are checked in order: word, definition, example, synonyms,
    /// antonyms. The first failure is returned.
    pub fn validate(req: &CreateWord) -> Result<Self, ValidationError> {
        let word = RequiredText::new("word", req.word.as_deref(), MAX_WORD_LEN)?;
        let definition =
            RequiredText::new("definition", req.definition.as_deref(), MAX_DEFINITION_LEN)?;
        let example = RequiredText::optional("example", req.example.as_deref(), MAX_EXAMPLE_LEN)?;
        let synonyms = TermSet::parse(
            "synonyms",
            req.synonyms.iter().flatten(),
            MAX_TERM_LEN,
        )?;
        let antonyms = TermSet::parse(
            "antonyms",
            req.antonyms.iter().flatten(),
            MAX_TERM_LEN,
        )?;

        Ok(Self {
            word,
            definition,
            example,
            synonyms,
            antonyms,
        })
    }
}

impl TryFrom<CreateWord> for NewWord {
    type Error = ValidationError;

    fn try_from(req: CreateWord) -> Result<Self, Self::Error> {
        Self::validate(&req)
    }
}

/// Validated replacement for `word` and `definition`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUpdate {
    pub word: RequiredText,
    pub definition: RequiredText,
}

impl TryFrom<UpdateWord> for WordUpdate {
    type Error = ValidationError;

    fn try_from(req: UpdateWord) -> Result<Self, Self::Error> {
        Ok(Self {
            word: RequiredText::new("word", req.word.as_deref(), MAX_WORD_LEN)?,
            definition: RequiredText::new(
                "definition",
                req.definition.as_deref(),
                MAX_DEFINITION_LEN,
            )?,
        })
    }
}

/// A stored word entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: Uuid,
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl WordEntry {
    /// Build an entry from a validated payload plus store-assigned fields.
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new: &NewWord) -> Self {
        Self {
            id,
            word: new.word.as_str().to_owned(),
            definition: new.definition.as_str().to_owned(),
            example: new.example.as_ref().map(|e| e.as_str().to_owned()),
            synonyms: new.synonyms.as_slice().to_vec(),
            antonyms: new.antonyms.as_slice().to_vec(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(value: serde_json::Value) -> CreateWord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validates_full_payload() {
        let new = NewWord::validate(&create(json!({
            "word": " ebullient ",
            "definition": "cheerful and full of energy",
            "example": "She was ebullient.",
            "synonyms": ["exuberant", "buoyant", "exuberant"],
        })))
        .unwrap();

        assert_eq!(new.word.as_str(), "ebullient");
        assert_eq!(new.example.unwrap().as_str(), "She was ebullient.");
        assert_eq!(new.synonyms.len(), 2);
        assert!(new.antonyms.is_empty());
    }

    #[test]
    fn word_checked_before_definition() {
        let err = NewWord::validate(&create(json!({}))).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "word" });

        let err = NewWord::validate(&create(json!({ "word": "run" }))).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "definition" });
    }

    #[test]
    fn null_fields_are_missing() {
        let err = NewWord::validate(&create(json!({ "word": null, "definition": "x" }))).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "word" });
    }

    #[test]
    fn blank_example_is_dropped() {
        let new = NewWord::validate(&create(json!({
            "word": "run",
            "definition": "move fast",
            "example": "  ",
        })))
        .unwrap();
        assert!(new.example.is_none());
    }

    #[test]
    fn update_requires_both_fields() {
        let req: UpdateWord = serde_json::from_value(json!({ "word": "run" })).unwrap();
        let err = WordUpdate::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "definition" });

        let req: UpdateWord =
            serde_json::from_value(json!({ "word": "", "definition": "" })).unwrap();
        let err = WordUpdate::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "word" });
    }

    #[test]
    fn entry_serializes_camel_case() {
        let new = NewWord::validate(&create(json!({ "word": "run", "definition": "move fast" })))
            .unwrap();
        let entry = WordEntry::from_new(Uuid::nil(), Utc::now(), &new);
        let value = serde_json::to_value(&entry).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
        assert!(value.get("example").is_none());
        assert_eq!(value["synonyms"], json!([]));
        assert_eq!(value["id"], json!(Uuid::nil().to_string()));
    }
}
