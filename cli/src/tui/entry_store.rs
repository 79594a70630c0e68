// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, ops::Deref, rc::Rc};

use potluck_core::{Category, Entry, EntryDraft, Error};

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait EntryStoreLike {
    type Output<'a>: Deref<Target = EntryStore>
    where
        Self: 'a;

    fn entry(&self) -> Self::Output<'_>;
}

/// Values of the entry form.
#[derive(Debug, Default)]
pub struct EntryStore {
    pub data: EntryData,

    /// Whether the user submitted the form
    pub submit: bool,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_by_entry(entry: &Entry) -> Self {
        Self {
            data: EntryData {
                name: entry.name.clone(),
                description: entry.description.clone(),
                category: entry.category(),
            },
            submit: false,
        }
    }

    /// The draft to send, if the required fields are filled in.
    pub fn submit_draft(&self) -> Result<EntryDraft, Error> {
        let draft = EntryDraft {
            name: self.data.name.clone(),
            description: self.data.description.clone(),
            category: self.data.category,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Clears the form, as after a successful submit.
    pub fn reset(&mut self) {
        self.data = EntryData::default();
        self.submit = false;
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateName(v) => that.borrow_mut().data.name = v.clone(),
            Action::UpdateDescription(v) => that.borrow_mut().data.description = v.clone(),
            Action::UpdateCategory(v) => that.borrow_mut().data.category = *v,
            Action::Submit => that.borrow_mut().submit = true,
            _ => {}
        }));
        dispatcher.register(callback);
    }
}

impl EntryStoreLike for EntryStore {
    type Output<'a> = &'a EntryStore;

    fn entry(&self) -> &EntryStore {
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryData {
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
}
