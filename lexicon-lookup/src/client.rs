//! Dictionary lookup client
//!
//! Fetches `GET {base_url}/{word}` and decodes the entry array.

use reqwest::{Client, StatusCode};

use crate::entry::{LookupEntry, NotFoundBody};

/// Variable overriding the lookup service base URL
pub const LOOKUP_URL_VAR: &str = "LEXICON_LOOKUP_URL";

/// Public dictionary API used when no override is set
pub const DEFAULT_LOOKUP_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Error bodies longer than this are truncated before logging
const MAX_ERROR_BODY: usize = 500;

/// Lookup error
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no word given")]
    EmptyWord,

    #[error("no definitions found for '{word}'")]
    NotFound { word: String },

    #[error("lookup service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the external dictionary service
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create client from `LEXICON_LOOKUP_URL`, falling back to the public API.
    pub fn from_env() -> Self {
        let base_url = std::env::var(LOOKUP_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL queried for `word`.
    pub fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(word))
    }

    /// Look up every sense the service knows for `word`.
    pub async fn lookup(&self, word: &str) -> Result<Vec<LookupEntry>, LookupError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LookupError::EmptyWord);
        }

        let url = self.entry_url(word);
        tracing::debug!(%url, "Looking up word");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_response(word, status, &body)
    }
}

/// Turn a raw service response into entries.
///
/// A 404, or any body shaped like `{"title": ...}`, means the word is
/// unknown. Other failures keep a truncated copy of the body.
pub fn decode_response(
    word: &str,
    status: StatusCode,
    body: &str,
) -> Result<Vec<LookupEntry>, LookupError> {
    let not_found = || LookupError::NotFound {
        word: word.to_string(),
    };

    if status == StatusCode::NOT_FOUND {
        return Err(not_found());
    }

    if !status.is_success() {
        let body = if body.len() > MAX_ERROR_BODY {
            let mut end = MAX_ERROR_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &body[..end])
        } else {
            body.to_string()
        };
        return Err(LookupError::Status { status, body });
    }

    if let Ok(err) = serde_json::from_str::<NotFoundBody>(body) {
        tracing::debug!(title = %err.title, "Lookup service reported no entry");
        return Err(not_found());
    }

    let entries: Vec<LookupEntry> = serde_json::from_str(body)?;
    if entries.is_empty() {
        return Err(not_found());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[{
        "word": "hello",
        "phonetic": "həˈləʊ",
        "phonetics": [{"text": "həˈləʊ", "audio": ""}],
        "meanings": [
            {
                "partOfSpeech": "exclamation",
                "definitions": [
                    {"definition": "used as a greeting", "example": "hello there, Katie!", "synonyms": [], "antonyms": []}
                ],
                "synonyms": ["hi"],
                "antonyms": ["bye"]
            },
            {
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "an utterance of 'hello'", "synonyms": ["greeting"], "antonyms": []}
                ]
            }
        ]
    }]"#;

    #[test]
    fn decodes_entries() {
        let entries = decode_response("hello", StatusCode::OK, HELLO).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert!(entry.meanings[1].synonyms.is_empty());
    }

    #[test]
    fn not_found_status() {
        let body = r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"..."}"#;
        let err = decode_response("zzxq", StatusCode::NOT_FOUND, body).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { word } if word == "zzxq"));
    }

    #[test]
    fn not_found_body_with_ok_status() {
        let body = r#"{"title":"No Definitions Found"}"#;
        let err = decode_response("zzxq", StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn server_error_truncates_body() {
        let body = "é".repeat(400);
        let err = decode_response("x", StatusCode::BAD_GATEWAY, &body).unwrap_err();
        match err {
            LookupError::Status { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert!(body.ends_with("..."));
                assert!(body.len() <= MAX_ERROR_BODY + 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = decode_response("x", StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn encodes_word_in_url() {
        let client = LookupClient::new("http://localhost:9000/entries/");
        assert_eq!(client.base_url(), "http://localhost:9000/entries");
        assert_eq!(
            client.entry_url("ice cream"),
            "http://localhost:9000/entries/ice%20cream"
        );
    }

    #[tokio::test]
    async fn blank_word_is_rejected_without_request() {
        let client = LookupClient::new("http://127.0.0.1:9");
        let err = client.lookup("   ").await.unwrap_err();
        assert!(matches!(err, LookupError::EmptyWord));
    }
}
