//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
///
/// Backends differ on whether ids are JSON strings or integers, so both are
/// accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNoteId", into = "String")]
pub struct NoteId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Number(u64),
}

impl From<RawNoteId> for NoteId {
    fn from(raw: RawNoteId) -> Self {
        match raw {
            RawNoteId::Text(s) => NoteId(s),
            RawNoteId::Number(n) => NoteId(n.to_string()),
        }
    }
}

impl From<NoteId> for String {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub important: bool,
}

impl Note {
    /// Copy of this note with importance inverted
    pub fn with_importance_toggled(&self) -> Self {
        Self {
            important: !self.important,
            ..self.clone()
        }
    }
}

/// Note draft sent to create; the server assigns the id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub content: String,
    pub important: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Authenticated user as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
