// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Optimistic deletes.

use std::sync::Arc;

use potluck_core::{Board, EntryId, Error};

use crate::common::{Call, MemoryGateway, sample_entries};

#[tokio::test]
async fn delete_removes_locally_before_remote_call() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    // Act
    let pending = board.delete(&EntryId::from("3"));

    // Assert: removed from the board, remote untouched until awaited
    assert_eq!(pending.id().as_str(), "3");
    assert_eq!(board.entries().len(), 4);
    assert!(board.entries().iter().all(|a| a.id != Some(EntryId::from("3"))));
    assert_eq!(gateway.calls(), vec![Call::List]);
    assert_eq!(gateway.stored().len(), 5);

    pending.await.unwrap();
    assert_eq!(gateway.stored().len(), 4);
    assert_eq!(
        gateway.calls(),
        vec![Call::List, Call::Delete(EntryId::from("3"))]
    );
}

#[tokio::test]
async fn delete_keeps_order_of_remaining_entries() {
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway);
    board.load().await.unwrap();

    board.delete(&EntryId::from("2")).await.unwrap();

    let ids: Vec<_> = board
        .entries()
        .iter()
        .filter_map(|a| a.id.as_ref().map(EntryId::as_str))
        .collect();
    assert_eq!(ids, ["1", "3", "4", "5"]);
}

#[tokio::test]
async fn failed_delete_is_not_rolled_back() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();
    gateway.set_fail_delete(true);

    // Act
    let result = board.delete(&EntryId::from("1")).await;

    // Assert
    assert!(matches!(result, Err(Error::Gateway(_))));
    assert_eq!(board.entries().len(), 4);
    assert_eq!(gateway.stored().len(), 5);

    // The entry reappears on the next load
    board.load().await.unwrap();
    assert_eq!(board.entries().len(), 5);
}

#[tokio::test]
async fn delete_of_unknown_id_still_reaches_gateway() {
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    let result = board.delete(&EntryId::from("missing")).await;

    assert!(result.is_err());
    assert_eq!(board.entries().len(), 5);
    assert_eq!(
        gateway.calls().last(),
        Some(&Call::Delete(EntryId::from("missing")))
    );
}

#[tokio::test]
async fn pending_delete_can_be_spawned() {
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    let handle = tokio::spawn(board.delete(&EntryId::from("4")));
    handle.await.unwrap().unwrap();

    assert!(gateway.stored().iter().all(|a| a.id != Some(EntryId::from("4"))));
}
