// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request bodies and the generated operation documents.

use serde::Serialize;
use serde_json::Value;

use crate::error::GraphQlError;

/// A GraphQL request body: `{ query, operationName, variables }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// The query or mutation document.
    pub query: &'static str,
    /// Name of the operation inside the document.
    pub operation_name: &'static str,
    /// Operation variables.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl GraphQlRequest {
    /// Creates a request without variables.
    #[must_use]
    pub const fn new(query: &'static str, operation_name: &'static str) -> Self {
        Self {
            query,
            operation_name,
            variables: Value::Null,
        }
    }

    /// Sets `$input` to the given value.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be serialized.
    pub fn input(mut self, input: &impl Serialize) -> Result<Self, GraphQlError> {
        self.variables = serde_json::json!({ "input": serde_json::to_value(input)? });
        Ok(self)
    }

    /// Serializes the request to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn build(&self) -> Result<String, GraphQlError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Generated operation documents of the notes API.
pub mod documents {
    /// Lists every note.
    pub const LIST_NOTES: &str = "\
query ListNotes($filter: ModelNoteFilterInput, $limit: Int, $nextToken: String) {
  listNotes(filter: $filter, limit: $limit, nextToken: $nextToken) {
    items {
      id
      name
      description
      type
      createdAt
      updatedAt
    }
    nextToken
  }
}";

    /// Creates a note.
    pub const CREATE_NOTE: &str = "\
mutation CreateNote($input: CreateNoteInput!, $condition: ModelNoteConditionInput) {
  createNote(input: $input, condition: $condition) {
    id
    name
    description
    type
    createdAt
    updatedAt
  }
}";

    /// Updates a note.
    pub const UPDATE_NOTE: &str = "\
mutation UpdateNote($input: UpdateNoteInput!, $condition: ModelNoteConditionInput) {
  updateNote(input: $input, condition: $condition) {
    id
    name
    description
    type
    createdAt
    updatedAt
  }
}";

    /// Deletes a note.
    pub const DELETE_NOTE: &str = "\
mutation DeleteNote($input: DeleteNoteInput!, $condition: ModelNoteConditionInput) {
  deleteNote(input: $input, condition: $condition) {
    id
    name
    description
    type
    createdAt
    updatedAt
  }
}";
}
