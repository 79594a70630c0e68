// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};
use potluck_graphql::GraphQlClient;

use crate::{Category, Config, Entry, EntryDraft, EntryId, Error, Gateway};

/// The sign-up board: the list of entries plus the transient view state.
///
/// Every mutation goes through the gateway. Create and update re-fetch the
/// whole list afterwards; delete removes the local copy first and never rolls
/// it back.
#[derive(Debug)]
pub struct Board<G: Gateway> {
    gateway: Arc<G>,
    entries: Vec<Entry>,
    editing: Option<Entry>,
    add_form_open: bool,
    loading: bool,
}

impl Board<GraphQlClient> {
    /// Creates a board backed by the configured GraphQL endpoint.
    pub fn connect(config: &Config) -> Result<Self, Error> {
        let client = GraphQlClient::new(config.gateway.clone())?;
        Ok(Self::new(client))
    }
}

impl<G: Gateway + 'static> Board<G> {
    /// Creates an empty board in the loading state.
    pub fn new(gateway: G) -> Self {
        Self::with_shared(Arc::new(gateway))
    }

    /// Creates an empty board over a shared gateway.
    pub fn with_shared(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            entries: Vec::new(),
            editing: None,
            add_form_open: false,
            loading: true,
        }
    }

    /// Entries in server order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry currently being edited, if any.
    pub fn editing(&self) -> Option<&Entry> {
        self.editing.as_ref()
    }

    /// Whether the given entry is the one being edited.
    pub fn is_editing(&self, entry: &Entry) -> bool {
        match (&self.editing, &entry.id) {
            (Some(editing), Some(id)) => editing.id.as_ref() == Some(id),
            _ => false,
        }
    }

    /// Whether the add form is open.
    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// Whether the first successful load is still pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches the full list and replaces the local entries.
    ///
    /// The loading flag is only cleared on success.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), Error> {
        let entries = self.gateway.list().await?;
        tracing::debug!(count = entries.len(), "loaded entries");
        self.entries = entries;
        self.loading = false;
        Ok(())
    }

    /// Creates an entry, closes the add form and re-fetches the list.
    ///
    /// The draft is sent as is; required fields are checked by the input
    /// surface before submitting.
    #[tracing::instrument(skip(self))]
    pub async fn create(&mut self, draft: &EntryDraft) -> Result<(), Error> {
        let entry = self.gateway.create(draft).await?;
        tracing::debug!(id = ?entry.id, "created entry");
        self.add_form_open = false;
        self.load().await
    }

    /// Selects the entry to edit, replacing any previous selection.
    pub fn begin_edit(&mut self, id: &EntryId) -> Result<&Entry, Error> {
        let entry = self
            .entries
            .iter()
            .find(|a| a.id.as_ref() == Some(id))
            .ok_or_else(|| Error::NotFound(id.clone()))?;

        if let Some(previous) = &self.editing {
            tracing::debug!(previous = ?previous.id, %id, "discarding previous edit");
        }
        Ok(self.editing.insert(entry.clone()))
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sends the new description of the entry being edited, re-fetches the
    /// list and leaves edit mode.
    #[tracing::instrument(skip(self))]
    pub async fn update(&mut self, description: &str) -> Result<(), Error> {
        let id = match &self.editing {
            Some(entry) => entry.id.clone().ok_or(Error::Unsaved)?,
            None => return Err(Error::NotEditing),
        };

        self.gateway.update(&id, description).await?;
        self.load().await?;
        self.editing = None;
        Ok(())
    }

    /// Removes the entry from the board right away and returns the pending
    /// remote delete.
    ///
    /// The returned future may be awaited or spawned; if it fails the local
    /// removal stays until the next [`Board::load`].
    pub fn delete(&mut self, id: &EntryId) -> PendingDelete {
        self.entries.retain(|a| a.id.as_ref() != Some(id));

        let gateway = self.gateway.clone();
        let remote_id = id.clone();
        let inner = async move {
            gateway.delete(&remote_id).await?;
            tracing::debug!(id = %remote_id, "deleted entry");
            Ok::<(), Error>(())
        }
        .boxed();

        PendingDelete {
            id: id.clone(),
            inner,
        }
    }

    /// Opens the add form.
    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    /// Closes the add form without submitting.
    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
    }

    /// The three display groups, in display order.
    ///
    /// Each group filters the full list independently; entries without a
    /// recognized category belong to no group.
    pub fn groups(&self) -> [Group<'_>; 3] {
        Category::ALL.map(|category| Group {
            category,
            entries: self
                .entries
                .iter()
                .filter(|a| a.category() == Some(category))
                .collect(),
        })
    }
}

/// Entries of one category.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    /// The category of every entry in the group.
    pub category: Category,

    /// Entries in server order.
    pub entries: Vec<&'a Entry>,
}

/// A remote delete issued by [`Board::delete`].
#[must_use = "the remote delete only runs when awaited or spawned"]
pub struct PendingDelete {
    id: EntryId,
    inner: BoxFuture<'static, Result<(), Error>>,
}

impl PendingDelete {
    /// The id being deleted.
    pub fn id(&self) -> &EntryId {
        &self.id
    }
}

impl std::fmt::Debug for PendingDelete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingDelete")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Future for PendingDelete {
    type Output = Result<(), Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}
