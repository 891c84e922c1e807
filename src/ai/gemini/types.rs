//! Gemini `generateContent` payload types.

use serde::{Deserialize, Serialize};

/// Top-level `generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A request holding one content block with one text part.
    pub fn from_text(text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        }
    }
}

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Text fragment of a content block. A part without text decodes as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Top-level `generateContent` response envelope.
///
/// Missing lists decode as empty so that an answer-less response surfaces as
/// "no content" rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if both exist.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}
