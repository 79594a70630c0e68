// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned note identifier.
///
/// The backend's `ID` scalar is serialized as a string; numeric ids are
/// accepted on input and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a new `NoteId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => Self(s),
            Raw::Int(n) => Self(n.to_string()),
        })
    }
}

impl Deref for NoteId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A note record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-assigned id.
    pub id: NoteId,
    /// Who signed up.
    pub name: String,
    /// What they are bringing.
    #[serde(default)]
    pub description: String,
    /// Free-form category value (`dish`, `dessert`, `drink`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Creation timestamp, as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp, as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Input of the `createNote` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateNoteInput {
    /// Who signed up.
    pub name: String,
    /// What they are bringing.
    pub description: String,
    /// Category value, omitted when not chosen.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Input of the `updateNote` mutation. Only the description is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateNoteInput {
    /// The note to update.
    pub id: NoteId,
    /// New description.
    pub description: String,
}

/// Input of the `deleteNote` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteNoteInput {
    /// The note to delete.
    pub id: NoteId,
}
