// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Response envelopes for GraphQL operations.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::GraphQlError;
use crate::types::Note;

/// A GraphQL response envelope: `{ data, errors }`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// The operation result, if any.
    pub data: Option<T>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

/// One entry of the `errors` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    /// Human readable message.
    pub message: String,
    /// Backend specific error type, e.g. `Unauthorized`.
    #[serde(default)]
    pub error_type: Option<String>,
}

impl<T: DeserializeOwned> GraphQlResponse<T> {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a valid response envelope.
    pub fn from_json(body: &str) -> Result<Self, GraphQlError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Returns the data, turning reported errors or missing data into an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError::Graphql`] if the server reported errors, or
    /// [`GraphQlError::InvalidResponse`] if there is no data.
    pub fn into_data(self) -> Result<T, GraphQlError> {
        if !self.errors.is_empty() {
            let messages = self
                .errors
                .into_iter()
                .map(|e| match e.error_type {
                    Some(kind) => format!("{kind}: {}", e.message),
                    None => e.message,
                })
                .collect();
            return Err(GraphQlError::Graphql(messages));
        }

        self.data
            .ok_or_else(|| GraphQlError::InvalidResponse("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListNotesData {
    pub list_notes: Option<NoteConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteConnection {
    #[serde(default)]
    pub items: Vec<Option<Note>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateNoteData {
    pub create_note: Option<Note>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateNoteData {
    pub update_note: Option<Note>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteNoteData {
    pub delete_note: Option<Note>,
}
