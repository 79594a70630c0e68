// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Editing descriptions.

use std::sync::Arc;

use potluck_core::{Board, EntryId, Error};

use crate::common::{Call, MemoryGateway, sample_entries};

async fn loaded_board() -> (Arc<MemoryGateway>, Board<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();
    (gateway, board)
}

#[tokio::test]
async fn begin_edit_selects_entry() {
    let (_, mut board) = loaded_board().await;

    let entry = board.begin_edit(&EntryId::from("2")).unwrap();
    assert_eq!(entry.description, "Lasagna");

    let editing = board.editing().unwrap();
    assert_eq!(editing.id, Some(EntryId::from("2")));
    assert!(board.is_editing(&board.entries()[1]));
    assert!(!board.is_editing(&board.entries()[0]));
}

#[tokio::test]
async fn begin_edit_replaces_previous_selection() {
    let (gateway, mut board) = loaded_board().await;

    board.begin_edit(&EntryId::from("1")).unwrap();
    board.begin_edit(&EntryId::from("3")).unwrap();

    assert_eq!(board.editing().unwrap().id, Some(EntryId::from("3")));
    assert_eq!(gateway.calls(), vec![Call::List]);
}

#[tokio::test]
async fn begin_edit_of_unknown_id_fails() {
    let (_, mut board) = loaded_board().await;

    let result = board.begin_edit(&EntryId::from("missing"));

    assert!(matches!(result, Err(Error::NotFound(ref id)) if id.as_str() == "missing"));
    assert!(board.editing().is_none());
}

#[tokio::test]
async fn update_sends_description_refetches_and_leaves_edit_mode() {
    // Arrange
    let (gateway, mut board) = loaded_board().await;
    board.begin_edit(&EntryId::from("1")).unwrap();

    // Act
    board.update("Apple pie").await.unwrap();

    // Assert
    assert!(board.editing().is_none());
    let entry = &board.entries()[0];
    assert_eq!(entry.description, "Apple pie");
    assert_eq!(entry.name, "Sam");
    assert_eq!(
        gateway.calls(),
        vec![
            Call::List,
            Call::Update(EntryId::from("1"), "Apple pie".to_string()),
            Call::List,
        ]
    );
}

#[tokio::test]
async fn update_without_edit_in_progress_makes_no_call() {
    let (gateway, mut board) = loaded_board().await;

    let result = board.update("Anything").await;

    assert!(matches!(result, Err(Error::NotEditing)));
    assert_eq!(gateway.calls(), vec![Call::List]);
}

#[tokio::test]
async fn cancel_edit_discards_selection() {
    let (gateway, mut board) = loaded_board().await;
    board.begin_edit(&EntryId::from("2")).unwrap();

    board.cancel_edit();

    assert!(board.editing().is_none());
    assert!(matches!(board.update("x").await, Err(Error::NotEditing)));
    assert_eq!(gateway.calls(), vec![Call::List]);
}

#[tokio::test]
async fn failed_update_stays_in_edit_mode() {
    // Arrange
    let (gateway, mut board) = loaded_board().await;
    board.begin_edit(&EntryId::from("2")).unwrap();
    let _ = board.delete(&EntryId::from("2")).await;

    // Act
    let result = board.update("Baked ziti").await;

    // Assert
    assert!(matches!(result, Err(Error::Gateway(_))));
    assert_eq!(board.editing().unwrap().id, Some(EntryId::from("2")));
    assert!(gateway.stored().iter().all(|a| a.id != Some(EntryId::from("2"))));
}
