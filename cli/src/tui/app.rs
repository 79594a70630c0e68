// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use potluck_core::{Board, Entry, EntryDraft, Error as CoreError, Gateway, Layout};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::board_store::{BoardStore, Request};
use crate::tui::board_view::BoardView;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::entry_editor::{new_description_editor, new_entry_editor};
use crate::tui::entry_store::EntryStore;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Asks for a new entry; `None` when the user leaves without submitting.
pub fn draft_entry() -> Result<Option<EntryDraft>, Box<dyn Error>> {
    let store = run_editor(EntryStore::new(), new_entry_editor(), |store| {
        store.submit_draft().is_ok()
    })?;
    match store.submit {
        true => Ok(Some(store.submit_draft()?)),
        false => Ok(None),
    }
}

/// Asks for a new description of the entry, prefilled with the current one.
pub fn edit_description(entry: &Entry) -> Result<Option<String>, Box<dyn Error>> {
    let title = format!("What is {} bringing?", entry.name);
    let store = run_editor(
        EntryStore::new_by_entry(entry),
        new_description_editor(title),
        |store| !store.data.description.trim().is_empty(),
    )?;
    match store.submit {
        true => Ok(Some(store.data.description)),
        false => Ok(None),
    }
}

/// Runs a form until it is left; a submit that `accept` refuses keeps it open.
fn run_editor<C, F>(store: EntryStore, mut view: C, accept: F) -> Result<EntryStore, Box<dyn Error>>
where
    C: Component<EntryStore>,
    F: Fn(&EntryStore) -> bool,
{
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        EntryStore::register_to(store.clone(), &mut dispatcher);
        view.activate(&mut dispatcher, &store);

        loop {
            if let Err(e) = draw(&view, store.as_ref(), &mut terminal) {
                break Err(e);
            }

            let key = match read_key(None) {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) => break Err(e),
            };
            let area = match terminal_area(&terminal) {
                Ok(area) => area,
                Err(e) => break Err(e),
            };
            if view.on_key(&mut dispatcher, &store, area, key) == Some(Message::Exit) {
                let mut s = store.borrow_mut();
                if !s.submit || accept(&s) {
                    break Ok(());
                }
                tracing::debug!("ignoring incomplete submit");
                s.submit = false;
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

/// Runs the interactive board until the user quits.
pub async fn run_board<G: Gateway + 'static>(
    board: &mut Board<G>,
    layout: Layout,
) -> Result<(), Box<dyn Error>> {
    let store = Rc::new(RefCell::new(BoardStore::new(layout)));
    store.borrow_mut().requests.push_back(Request::Load);

    let mut dispatcher = Dispatcher::new();
    BoardStore::register_to(store.clone(), &mut dispatcher);
    let mut view = BoardView::new();

    let mut terminal = ratatui::init();
    let result = board_loop(board, &store, &mut dispatcher, &mut view, &mut terminal).await;
    ratatui::restore();
    result
}

async fn board_loop<G: Gateway + 'static>(
    board: &mut Board<G>,
    store: &RefCell<BoardStore>,
    dispatcher: &mut Dispatcher,
    view: &mut BoardView,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    loop {
        draw(view, store, terminal)?;

        let requests = store.borrow_mut().take_requests();
        if !requests.is_empty() {
            apply_requests(board, store, requests).await;
            view.follow_mode(dispatcher, store);
            continue;
        }

        let Some(key) = read_key(Some(POLL_INTERVAL))? else {
            continue;
        };
        let area = terminal_area(terminal)?;
        if view.on_key(dispatcher, store, area, key) == Some(Message::Exit) {
            tracing::debug!("leaving the board");
            return Ok(());
        }
    }
}

/// Applies queued requests in order, then copies the board into the store.
///
/// A failed request is shown as a notice and the rest still run.
async fn apply_requests<G: Gateway + 'static>(
    board: &mut Board<G>,
    store: &RefCell<BoardStore>,
    requests: Vec<Request>,
) {
    for request in requests {
        tracing::debug!(?request, "applying request");
        if let Err(e) = apply_request(board, request).await {
            tracing::warn!(error = %e, "request failed");
            store.borrow_mut().notice = Some(e.to_string());
        }
    }
    store.borrow_mut().sync(board);
}

async fn apply_request<G: Gateway + 'static>(
    board: &mut Board<G>,
    request: Request,
) -> Result<(), CoreError> {
    match request {
        Request::Load => board.load().await,
        Request::Create(draft) => board.create(&draft).await,
        Request::BeginEdit(id) => board.begin_edit(&id).map(|_| ()),
        Request::CancelEdit => {
            board.cancel_edit();
            Ok(())
        }
        Request::Update(description) => board.update(&description).await,
        Request::Delete(id) => {
            let pending = board.delete(&id);
            tokio::spawn(async move {
                if let Err(e) = pending.await {
                    tracing::warn!(%id, error = %e, "failed to delete entry");
                }
            });
            Ok(())
        }
        Request::OpenAddForm => {
            board.open_add_form();
            Ok(())
        }
        Request::CloseAddForm => {
            board.close_add_form();
            Ok(())
        }
    }
}

fn draw<S, C: Component<S>>(
    view: &C,
    store: &RefCell<S>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|frame| {
        let area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some(position) = view.get_cursor_position(store, area) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(())
}

/// Reads the next key press, waiting at most `timeout` when given.
fn read_key(timeout: Option<Duration>) -> Result<Option<KeyEvent>, Box<dyn Error>> {
    if let Some(timeout) = timeout
        && !event::poll(timeout)?
    {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn terminal_area(terminal: &DefaultTerminal) -> Result<Rect, Box<dyn Error>> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}
