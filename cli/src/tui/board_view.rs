// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use potluck_core::{Category, Entry, Layout as EntryLayout};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Input};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::entry_editor::{EntryForm, new_entry_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Adding,
    Editing,
}

/// The whole sign-up board: heading, grouped entries, add form and inline editor.
pub struct BoardView {
    add_form: EntryForm<BoardStore>,
    edit_input: Input<BoardStore, EditDescriptionAccess>,
    mode: Mode,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            add_form: new_entry_form(),
            edit_input: Input::new("Description"),
            mode: Mode::Browse,
        }
    }

    /// Moves the focus to the add form or the inline editor once the board
    /// opened one of them, and back when it closed.
    pub fn follow_mode(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        let mode = {
            let store = store.borrow();
            if store.add_form_open {
                Mode::Adding
            } else if store.editing.is_some() {
                Mode::Editing
            } else {
                Mode::Browse
            }
        };
        if mode == self.mode {
            return;
        }

        match self.mode {
            Mode::Adding => self.add_form.deactivate(dispatcher, store),
            Mode::Editing => self.edit_input.deactivate(dispatcher, store),
            Mode::Browse => {}
        }
        match mode {
            Mode::Adding => self.add_form.activate(dispatcher, store),
            Mode::Editing => self.edit_input.activate(dispatcher, store),
            Mode::Browse => {}
        }
        self.mode = mode;
    }

    fn split(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn form_block() -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" What're you bringing? ".bold()).centered())
    }

    fn footer(&self) -> Line<'static> {
        let keys: &[(&str, &str)] = match self.mode {
            Mode::Browse => &[
                ("Select", "<Up/Down>"),
                ("Add", "<a>"),
                ("Edit", "<e>"),
                ("Delete", "<d>"),
                ("Reload", "<r>"),
                ("Quit", "<q>"),
            ],
            Mode::Adding => &[
                ("Next", "<Tab>"),
                ("Save", "<Enter>"),
                ("Cancel", "<Esc>"),
            ],
            Mode::Editing => &[("Save", "<Enter>"), ("Cancel", "<Esc>")],
        };
        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(label, key)| [format!(" {label} ").into(), key.blue().bold()])
            .collect();
        Line::from(spans)
    }
}

/// Lines of the entry list plus where the selection and the inline editor are.
struct Body<'a> {
    lines: Vec<Line<'a>>,
    selected_line: Option<usize>,
    edit_at: Option<(usize, u16)>,
}

impl<'a> Body<'a> {
    fn new(store: &'a BoardStore) -> Self {
        let mut body = Body {
            lines: Vec::new(),
            selected_line: None,
            edit_at: None,
        };

        let mut row = 0;
        match store.layout {
            EntryLayout::Grouped => {
                for category in Category::ALL {
                    if !body.lines.is_empty() {
                        body.lines.push(Line::default());
                    }
                    body.lines.push(Line::from(
                        category.title().bold().fg(category_color(category)),
                    ));

                    let entries = store
                        .entries
                        .iter()
                        .filter(|a| a.category() == Some(category));
                    for entry in entries {
                        body.push_entry(store, entry, row, None);
                        row += 1;
                    }
                }
            }
            EntryLayout::Flat => {
                for entry in &store.entries {
                    let tag = entry.category.as_deref().unwrap_or("-");
                    body.push_entry(store, entry, row, Some(tag));
                    row += 1;
                }
            }
        }
        body
    }

    fn push_entry(
        &mut self,
        store: &'a BoardStore,
        entry: &'a Entry,
        row: usize,
        tag: Option<&'a str>,
    ) {
        let selected = store.selected == row;
        let marker = if selected { "> " } else { "  " };
        let prefix = format!("{marker}{}: ", entry.name);
        let prefix_width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);

        let line_index = self.lines.len();
        if selected {
            self.selected_line = Some(line_index);
        }

        let mut spans = vec![Span::from(prefix).bold()];
        if store.is_editing(entry) {
            self.edit_at = Some((line_index, prefix_width));
            spans.push(Span::from(store.edit_description.as_str()).underlined());
        } else {
            spans.push(Span::from(entry.description.as_str()));
            if let Some(tag) = tag {
                spans.push(format!("  [{tag}]").dark_gray());
            }
        }

        let line = Line::from(spans);
        self.lines.push(if selected { line.reversed() } else { line });
    }

    fn scroll(&self, height: u16) -> u16 {
        let line = self.selected_line.unwrap_or(0);
        let line = u16::try_from(line).unwrap_or(u16::MAX);
        (line + 1).saturating_sub(height)
    }
}

impl Component<BoardStore> for BoardView {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let [heading, body_area, notice, footer] = Self::split(area);

        Paragraph::new(vec![
            Line::from("POTLUCK".bold().yellow()),
            Line::from("WHAT'RE YOU BRINGING?".bold()),
        ])
        .centered()
        .render(heading, buf);

        if self.mode == Mode::Adding {
            let block = Self::form_block();
            let inner = block.inner(body_area);
            block.render(body_area, buf);
            self.add_form.render(store, inner, buf);
        } else {
            let s = store.borrow();
            if s.loading {
                Paragraph::new("Loading...".italic()).render(body_area, buf);
            } else {
                let body = Body::new(&s);
                let offset = body.scroll(body_area.height);
                Paragraph::new(body.lines)
                    .scroll((offset, 0))
                    .render(body_area, buf);
            }
        }

        if let Some(text) = store.borrow().notice.as_deref() {
            Paragraph::new(text.red()).render(notice, buf);
        }
        self.footer().centered().render(footer, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        let [_, body_area, _, _] = Self::split(area);
        match self.mode {
            Mode::Adding => {
                let inner = Self::form_block().inner(body_area);
                self.add_form.get_cursor_position(store, inner)
            }
            Mode::Editing => {
                let (line, x) = {
                    let s = store.borrow();
                    let body = Body::new(&s);
                    let offset = body.scroll(body_area.height);
                    let (line, x) = body.edit_at?;
                    let line = u16::try_from(line).ok()?.checked_sub(offset)?;
                    (line, x)
                };
                if line >= body_area.height {
                    return None;
                }
                let input_area = Rect::new(
                    body_area.x.saturating_add(x),
                    body_area.y + line,
                    body_area.width.saturating_sub(x),
                    1,
                );
                self.edit_input.get_cursor_position(store, input_area)
            }
            Mode::Browse => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        let action = match self.mode {
            Mode::Adding => {
                if event.code == Esc {
                    Action::CloseAddForm
                } else {
                    let [_, body_area, _, _] = Self::split(area);
                    let inner = Self::form_block().inner(body_area);
                    // The form exits once it dispatched the submit.
                    return match self.add_form.on_key(dispatcher, store, inner, event) {
                        Some(Message::Exit) => Some(Message::Handled),
                        msg => msg,
                    };
                }
            }
            Mode::Editing => match event.code {
                Esc => Action::CancelEdit,
                Enter => Action::Submit,
                _ => return self.edit_input.on_key(dispatcher, store, area, event),
            },
            Mode::Browse => match event.code {
                Up | Char('k') => Action::SelectPrevious,
                Down | Char('j') => Action::SelectNext,
                Char('a') => Action::OpenAddForm,
                Char('e') | Enter => Action::BeginEdit,
                Char('d') | Delete => Action::DeleteSelected,
                Char('r') => Action::Reload,
                Esc | Char('q') => return Some(Message::Exit),
                _ => return None,
            },
        };

        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

pub struct EditDescriptionAccess;

impl Access<BoardStore, String> for EditDescriptionAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().edit_description.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) {
        dispatcher.dispatch(Action::UpdateEditDescription(value));
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Dish => Color::Yellow,
        Category::Dessert => Color::Magenta,
        Category::Drink => Color::Cyan,
    }
}
