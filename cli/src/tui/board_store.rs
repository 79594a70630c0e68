// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use potluck_core::{Board, Category, Entry, EntryDraft, EntryId, Gateway, Layout};

use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::entry_store::{EntryStore, EntryStoreLike};

/// Work for the board, queued by the view and applied by the run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load,
    Create(EntryDraft),
    BeginEdit(EntryId),
    CancelEdit,
    Update(String),
    Delete(EntryId),
    OpenAddForm,
    CloseAddForm,
}

/// Snapshot of the board plus the state only the terminal view needs.
#[derive(Debug)]
pub struct BoardStore {
    pub entries: Vec<Entry>,
    pub layout: Layout,
    pub loading: bool,
    pub add_form_open: bool,

    /// Id of the entry being edited
    pub editing: Option<EntryId>,

    /// Index into [`BoardStore::rows`]
    pub selected: usize,

    pub form: Rc<RefCell<EntryStore>>,
    pub edit_description: String,
    pub notice: Option<String>,
    pub requests: VecDeque<Request>,
}

impl BoardStore {
    pub fn new(layout: Layout) -> Self {
        Self {
            entries: Vec::new(),
            layout,
            loading: true,
            add_form_open: false,
            editing: None,
            selected: 0,
            form: Rc::new(RefCell::new(EntryStore::new())),
            edit_description: String::new(),
            notice: None,
            requests: VecDeque::new(),
        }
    }

    /// Entries in display order: grouped by category, or server order when flat.
    pub fn rows(&self) -> Vec<&Entry> {
        match self.layout {
            Layout::Grouped => Category::ALL
                .into_iter()
                .flat_map(|category| {
                    self.entries
                        .iter()
                        .filter(move |a| a.category() == Some(category))
                })
                .collect(),
            Layout::Flat => self.entries.iter().collect(),
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.rows().get(self.selected).copied()
    }

    pub fn is_editing(&self, entry: &Entry) -> bool {
        self.editing.is_some() && self.editing == entry.id
    }

    /// Copies the board state after a request has been applied.
    pub fn sync<G: Gateway + 'static>(&mut self, board: &Board<G>) {
        self.entries = board.entries().to_vec();
        self.loading = board.is_loading();

        if self.add_form_open && !board.is_add_form_open() {
            self.form.borrow_mut().reset();
        }
        self.add_form_open = board.is_add_form_open();

        let editing = board.editing().and_then(|a| a.id.clone());
        if editing != self.editing {
            self.edit_description = board
                .editing()
                .map(|a| a.description.clone())
                .unwrap_or_default();
            self.editing = editing;
        }

        let rows = self.rows().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    pub fn take_requests(&mut self) -> Vec<Request> {
        self.requests.drain(..).collect()
    }

    fn push(&mut self, request: Request) {
        self.notice = None;
        self.requests.push_back(request);
    }

    fn select(&mut self, offset: isize) {
        let last = self.rows().len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(offset).min(last);
    }

    fn submit(&mut self) {
        if self.add_form_open {
            let draft = self.form.borrow().submit_draft();
            match draft {
                Ok(draft) => self.push(Request::Create(draft)),
                Err(e) => self.notice = Some(e.to_string()),
            }
        } else if self.editing.is_some() {
            if self.edit_description.trim().is_empty() {
                self.notice = Some("The description is required".to_string());
            } else {
                self.push(Request::Update(self.edit_description.clone()));
            }
        }
    }

    fn selected_id(&mut self) -> Option<EntryId> {
        let id = self.selected_entry().map(|a| a.id.clone());
        match id {
            Some(Some(id)) => Some(id),
            Some(None) => {
                self.notice = Some("This entry has not been saved yet".to_string());
                None
            }
            None => None,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        EntryStore::register_to(that.borrow().form.clone(), dispatcher);

        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::SelectPrevious => that.select(-1),
                Action::SelectNext => that.select(1),
                Action::OpenAddForm => that.push(Request::OpenAddForm),
                Action::CloseAddForm => that.push(Request::CloseAddForm),
                Action::BeginEdit => {
                    if let Some(id) = that.selected_id() {
                        that.push(Request::BeginEdit(id));
                    }
                }
                Action::CancelEdit => that.push(Request::CancelEdit),
                Action::DeleteSelected => {
                    if let Some(id) = that.selected_id() {
                        that.push(Request::Delete(id));
                    }
                }
                Action::Reload => that.push(Request::Load),
                Action::UpdateEditDescription(v) => that.edit_description = v.clone(),
                Action::Submit => that.submit(),
                _ => {}
            }
        }));
        dispatcher.register(callback);
    }
}

impl EntryStoreLike for BoardStore {
    type Output<'a> = Ref<'a, EntryStore>;

    fn entry(&self) -> Ref<'_, EntryStore> {
        self.form.borrow()
    }
}
