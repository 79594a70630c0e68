// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! GraphQL client for the notes API.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::GraphQlConfig;
use crate::error::GraphQlError;
use crate::http::HttpClient;
use crate::request::{GraphQlRequest, documents};
use crate::response::{
    CreateNoteData, DeleteNoteData, GraphQlResponse, ListNotesData, UpdateNoteData,
};
use crate::types::{CreateNoteInput, DeleteNoteInput, Note, NoteId, UpdateNoteInput};

/// GraphQL client for listing, creating, updating and deleting notes.
///
/// # Example
///
/// ```ignore
/// use potluck_graphql::{AuthMethod, GraphQlClient, GraphQlConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GraphQlConfig {
///     endpoint: "https://example.appsync-api.us-east-1.amazonaws.com/graphql".to_string(),
///     auth: AuthMethod::ApiKey {
///         key: "da2-xxxxxxxx".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let client = GraphQlClient::new(config)?;
/// let notes = client.list_notes().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Arc<HttpClient>,
}

impl GraphQlClient {
    /// Creates a new GraphQL client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: GraphQlConfig) -> Result<Self, GraphQlError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Sends a request and decodes the `data` member of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports errors or
    /// the response cannot be decoded.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
    ) -> Result<T, GraphQlError> {
        tracing::debug!(operation = request.operation_name, "sending graphql request");
        let body = request.build()?;
        let resp = self
            .http
            .execute(
                self.http
                    .build_request()
                    .header("Content-Type", "application/json")
                    .body(body),
            )
            .await?;

        let text = resp.text().await?;
        GraphQlResponse::<T>::from_json(&text)?.into_data()
    }

    /// Lists every note, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_notes(&self) -> Result<Vec<Note>, GraphQlError> {
        let request = GraphQlRequest::new(documents::LIST_NOTES, "ListNotes");
        let data: ListNotesData = self.execute(&request).await?;

        let notes = data
            .list_notes
            .ok_or_else(|| GraphQlError::InvalidResponse("listNotes is null".to_string()))?
            .items
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        tracing::debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    /// Creates a note; the server assigns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails.
    pub async fn create_note(&self, input: &CreateNoteInput) -> Result<Note, GraphQlError> {
        let request = GraphQlRequest::new(documents::CREATE_NOTE, "CreateNote").input(input)?;
        let data: CreateNoteData = self.execute(&request).await?;
        data.create_note
            .ok_or_else(|| GraphQlError::InvalidResponse("createNote is null".to_string()))
    }

    /// Replaces the description of a note.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails.
    pub async fn update_note(&self, input: &UpdateNoteInput) -> Result<Note, GraphQlError> {
        let request = GraphQlRequest::new(documents::UPDATE_NOTE, "UpdateNote").input(input)?;
        let data: UpdateNoteData = self.execute(&request).await?;
        data.update_note
            .ok_or_else(|| GraphQlError::InvalidResponse("updateNote is null".to_string()))
    }

    /// Deletes a note and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails.
    pub async fn delete_note(&self, id: &NoteId) -> Result<Note, GraphQlError> {
        let input = DeleteNoteInput { id: id.clone() };
        let request = GraphQlRequest::new(documents::DELETE_NOTE, "DeleteNote").input(&input)?;
        let data: DeleteNoteData = self.execute(&request).await?;
        data.delete_note
            .ok_or_else(|| GraphQlError::InvalidResponse("deleteNote is null".to_string()))
    }
}
