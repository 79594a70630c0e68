// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory gateway recording every call.

use std::sync::Mutex;

use async_trait::async_trait;
use potluck_core::{Entry, EntryDraft, EntryId, Gateway};
use potluck_graphql::GraphQlError;

/// A call received by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(EntryDraft),
    Update(EntryId, String),
    Delete(EntryId),
}

/// Gateway keeping its entries in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    next_id: u32,
    calls: Vec<Call>,
    fail_list: bool,
    fail_create: bool,
    fail_delete: bool,
}

#[allow(dead_code)]
impl MemoryGateway {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let next_id = u32::try_from(entries.len()).unwrap() + 1;
        Self {
            state: Mutex::new(State {
                entries,
                next_id: next_id.max(100),
                ..Default::default()
            }),
        }
    }

    /// Entries as currently stored on the "server".
    pub fn stored(&self) -> Vec<Entry> {
        self.state.lock().unwrap().entries.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    /// Inserts an entry behind the board's back, as another client would.
    pub fn insert_remote(&self, entry: Entry) {
        self.state.lock().unwrap().entries.push(entry);
    }
}

fn unavailable() -> GraphQlError {
    GraphQlError::Http("503 Service Unavailable: backend down".to_string())
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn list(&self) -> Result<Vec<Entry>, GraphQlError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(unavailable());
        }
        Ok(state.entries.clone())
    }

    async fn create(&self, draft: &EntryDraft) -> Result<Entry, GraphQlError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(draft.clone()));
        if state.fail_create {
            return Err(unavailable());
        }

        let id = state.next_id;
        state.next_id += 1;
        let entry = Entry {
            id: Some(id.to_string().into()),
            name: draft.name.clone(),
            description: draft.description.clone(),
            category: draft.category.map(|a| a.wire_value().to_string()),
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: &EntryId, description: &str) -> Result<Entry, GraphQlError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::Update(id.clone(), description.to_string()));

        let entry = state
            .entries
            .iter_mut()
            .find(|a| a.id.as_ref() == Some(id))
            .ok_or_else(|| GraphQlError::Graphql(vec!["The conditional request failed".into()]))?;
        entry.description = description.to_string();
        Ok(entry.clone())
    }

    async fn delete(&self, id: &EntryId) -> Result<Entry, GraphQlError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id.clone()));
        if state.fail_delete {
            return Err(unavailable());
        }

        let index = state
            .entries
            .iter()
            .position(|a| a.id.as_ref() == Some(id))
            .ok_or_else(|| GraphQlError::Graphql(vec!["The conditional request failed".into()]))?;
        Ok(state.entries.remove(index))
    }
}
