// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use potluck_graphql::{CreateNoteInput, GraphQlClient, GraphQlError, UpdateNoteInput};

use crate::{Entry, EntryDraft, EntryId};

/// The remote store behind the board.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Returns every entry, in server order.
    async fn list(&self) -> Result<Vec<Entry>, GraphQlError>;

    /// Creates an entry; the server assigns its id.
    async fn create(&self, draft: &EntryDraft) -> Result<Entry, GraphQlError>;

    /// Replaces the description of an entry.
    async fn update(&self, id: &EntryId, description: &str) -> Result<Entry, GraphQlError>;

    /// Deletes an entry and returns the removed record.
    async fn delete(&self, id: &EntryId) -> Result<Entry, GraphQlError>;
}

#[async_trait]
impl Gateway for GraphQlClient {
    async fn list(&self) -> Result<Vec<Entry>, GraphQlError> {
        let notes = self.list_notes().await?;
        Ok(notes.into_iter().map(Entry::from).collect())
    }

    async fn create(&self, draft: &EntryDraft) -> Result<Entry, GraphQlError> {
        let input = CreateNoteInput {
            name: draft.name.clone(),
            description: draft.description.clone(),
            kind: draft.category.map(|a| a.wire_value().to_string()),
        };
        self.create_note(&input).await.map(Entry::from)
    }

    async fn update(&self, id: &EntryId, description: &str) -> Result<Entry, GraphQlError> {
        let input = UpdateNoteInput {
            id: id.into(),
            description: description.to_string(),
        };
        self.update_note(&input).await.map(Entry::from)
    }

    async fn delete(&self, id: &EntryId) -> Result<Entry, GraphQlError> {
        self.delete_note(&id.into()).await.map(Entry::from)
    }
}
