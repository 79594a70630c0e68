// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading and creating entries.

use std::sync::Arc;

use potluck_core::{Board, Category, Error};

use crate::common::{Call, MemoryGateway, sample_entries, test_draft, test_entry};

#[tokio::test]
async fn board_starts_empty_and_loading() {
    let board = Board::new(MemoryGateway::default());

    assert!(board.is_loading());
    assert!(board.entries().is_empty());
    assert!(board.editing().is_none());
    assert!(!board.is_add_form_open());
}

#[tokio::test]
async fn load_replaces_entries_in_server_order() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());

    // Act
    board.load().await.unwrap();

    // Assert
    assert!(!board.is_loading());
    assert_eq!(board.entries(), gateway.stored().as_slice());
    assert_eq!(gateway.calls(), vec![Call::List]);
}

#[tokio::test]
async fn load_of_empty_list_clears_loading() {
    let mut board = Board::new(MemoryGateway::default());

    board.load().await.unwrap();

    assert!(!board.is_loading());
    assert!(board.entries().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_loading_and_entries() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    gateway.set_fail_list(true);

    // Act
    let result = board.load().await;

    // Assert
    assert!(matches!(result, Err(Error::Gateway(_))));
    assert!(board.is_loading());
    assert!(board.entries().is_empty());
}

#[tokio::test]
async fn failed_reload_keeps_previous_entries() {
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    gateway.set_fail_list(true);
    assert!(board.load().await.is_err());

    assert!(!board.is_loading());
    assert_eq!(board.entries().len(), 5);
}

#[tokio::test]
async fn create_refetches_and_closes_add_form() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::default());
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();
    board.open_add_form();

    // Act
    let draft = test_draft("Ana", "Tacos", Some(Category::Dish));
    board.create(&draft).await.unwrap();

    // Assert
    assert!(!board.is_add_form_open());
    assert_eq!(board.entries().len(), 1);
    let entry = &board.entries()[0];
    assert_eq!(entry.name, "Ana");
    assert_eq!(entry.description, "Tacos");
    assert_eq!(entry.category(), Some(Category::Dish));
    assert!(entry.id.is_some());

    assert_eq!(
        gateway.calls(),
        vec![Call::List, Call::Create(draft), Call::List]
    );
}

#[tokio::test]
async fn create_picks_up_entries_added_elsewhere() {
    let gateway = Arc::new(MemoryGateway::default());
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    gateway.insert_remote(test_entry("other", "Bo", "Chips", Some("dish")));
    board
        .create(&test_draft("Ana", "Tacos", None))
        .await
        .unwrap();

    assert_eq!(board.entries().len(), 2);
    assert_eq!(board.entries()[0].name, "Bo");
    assert_eq!(board.entries()[1].name, "Ana");
}

#[tokio::test]
async fn create_without_category_is_kept_but_ungrouped() {
    let mut board = Board::new(MemoryGateway::default());

    board
        .create(&test_draft("Ana", "Forks", None))
        .await
        .unwrap();

    assert_eq!(board.entries().len(), 1);
    assert!(board.groups().iter().all(|a| a.entries.is_empty()));
}

#[tokio::test]
async fn failed_create_leaves_form_open_and_list_untouched() {
    // Arrange
    let gateway = Arc::new(MemoryGateway::with_entries(sample_entries()));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();
    board.open_add_form();
    gateway.set_fail_create(true);

    // Act
    let result = board
        .create(&test_draft("Ana", "Tacos", Some(Category::Drink)))
        .await;

    // Assert
    assert!(matches!(result, Err(Error::Gateway(_))));
    assert!(board.is_add_form_open());
    assert_eq!(board.entries().len(), 5);
    assert_eq!(gateway.calls().last(), Some(&Call::Create(test_draft("Ana", "Tacos", Some(Category::Drink)))));
}

#[tokio::test]
async fn add_form_toggles() {
    let mut board = Board::new(MemoryGateway::default());

    board.open_add_form();
    assert!(board.is_add_form_open());

    board.close_add_form();
    assert!(!board.is_add_form_open());
}
