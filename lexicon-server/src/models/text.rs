//! Text field validation
//!
//! `RequiredText` is a trimmed, non-empty, length-capped string.
//! `TermSet` is a deduplicated list of synonyms or antonyms.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Validated, trimmed, non-empty text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredText(String);

impl RequiredText {
    /// Trim `raw` and check it against `max` characters.
    ///
    /// A missing value and a value that is blank after trimming are
    /// both reported as `Empty`.
    ///
    /// # Example
    /// ```
    /// use lexicon_server::models::RequiredText;
    ///
    /// let word = RequiredText::new("word", Some("  ebullient "), 128).unwrap();
    /// assert_eq!(word.as_str(), "ebullient");
    /// assert!(RequiredText::new("word", Some("   "), 128).is_err());
    /// assert!(RequiredText::new("word", None, 128).is_err());
    /// ```
    pub fn new(field: &'static str, raw: Option<&str>, max: usize) -> Result<Self, ValidationError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Like `new`, but a missing or blank value is `Ok(None)`.
    pub fn optional(
        field: &'static str,
        raw: Option<&str>,
        max: usize,
    ) -> Result<Option<Self>, ValidationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => Self::new(field, Some(s), max).map(Some),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deduplicated set of terms, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermSet(Vec<String>);

impl TermSet {
    /// Build a set from raw terms.
    ///
    /// Terms are trimmed, blanks dropped, and exact duplicates removed.
    /// Terms longer than `max` characters are rejected.
    pub fn parse<I, S>(field: &'static str, terms: I, max: usize) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                continue;
            }
            if term.chars().count() > max {
                return Err(ValidationError::TooLong { field, max });
            }
            if !out.iter().any(|t| t == term) {
                out.push(term.to_owned());
            }
        }
        Ok(Self(out))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.iter().any(|t| t == term)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_required_text() {
        let text = RequiredText::new("word", Some("\trun\n"), 10).unwrap();
        assert_eq!(text.as_str(), "run");
    }

    #[test]
    fn rejects_blank() {
        let err = RequiredText::new("definition", Some("  "), 10).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "definition" });
    }

    #[test]
    fn rejects_missing() {
        let err = RequiredText::new("word", None, 10).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "word" });
    }

    #[test]
    fn max_length_counts_chars() {
        // 4 chars, 8 bytes
        assert!(RequiredText::new("word", Some("ñañá"), 4).is_ok());

        let err = RequiredText::new("word", Some("abcde"), 4).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 4, .. }));
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(RequiredText::optional("example", Some("   "), 10).unwrap(), None);
        assert_eq!(RequiredText::optional("example", None, 10).unwrap(), None);

        let some = RequiredText::optional("example", Some(" hi "), 10).unwrap();
        assert_eq!(some.unwrap().as_str(), "hi");
    }

    #[test]
    fn term_set_dedups() {
        let set = TermSet::parse("synonyms", ["happy", "glad", "happy"], 32).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), ["happy", "glad"]);
    }

    #[test]
    fn term_set_trims_and_drops_blanks() {
        let set = TermSet::parse("antonyms", [" sad ", "", "sad", "  "], 32).unwrap();
        assert_eq!(set.as_slice(), ["sad"]);
    }

    #[test]
    fn term_set_is_case_sensitive() {
        let set = TermSet::parse("synonyms", ["Glad", "glad"], 32).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn term_set_rejects_long_terms() {
        let err = TermSet::parse("synonyms", ["x".repeat(33)], 32).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { field: "synonyms", max: 32 });
    }
}
