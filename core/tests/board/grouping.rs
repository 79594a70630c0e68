// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Category groups.

use std::sync::Arc;

use potluck_core::{Board, Category, EntryId};

use crate::common::{MemoryGateway, sample_entries, test_entry};

fn names(group: &potluck_core::Group<'_>) -> Vec<String> {
    group.entries.iter().map(|a| a.name.clone()).collect()
}

#[tokio::test]
async fn groups_are_in_display_order() {
    let board = Board::new(MemoryGateway::default());

    let groups = board.groups();

    let categories: Vec<_> = groups.iter().map(|a| a.category).collect();
    assert_eq!(
        categories,
        [Category::Dish, Category::Dessert, Category::Drink]
    );
    assert!(groups.iter().all(|a| a.entries.is_empty()));
}

#[tokio::test]
async fn groups_partition_by_category_in_server_order() {
    let mut board = Board::new(MemoryGateway::with_entries(sample_entries()));
    board.load().await.unwrap();

    let [dish, dessert, drink] = board.groups();

    assert_eq!(names(&dish), ["Lee", "Ray"]);
    assert_eq!(names(&dessert), ["Sam"]);
    assert_eq!(names(&drink), ["Kai"]);
}

#[tokio::test]
async fn unrecognized_categories_are_hidden() {
    let mut board = Board::new(MemoryGateway::with_entries(vec![
        test_entry("1", "Sam", "Pie", Some("snack")),
        test_entry("2", "Lee", "Cups", None),
        test_entry("3", "Kai", "Soda", Some("Drink")),
        test_entry("4", "Bo", "Cake", Some("desert")),
    ]));
    board.load().await.unwrap();

    let [dish, dessert, drink] = board.groups();

    assert!(dish.entries.is_empty());
    assert!(drink.entries.is_empty());
    assert_eq!(names(&dessert), ["Bo"]);
    assert_eq!(board.entries().len(), 4);
}

#[tokio::test]
async fn single_dessert_fills_only_the_dessert_group() {
    let mut board = Board::new(MemoryGateway::with_entries(vec![test_entry(
        "1",
        "Sam",
        "Pie",
        Some("dessert"),
    )]));
    board.load().await.unwrap();

    let [dish, dessert, drink] = board.groups();

    assert!(dish.entries.is_empty());
    assert!(drink.entries.is_empty());
    assert_eq!(dessert.entries.len(), 1);
    assert_eq!(dessert.entries[0].name, "Sam");
    assert_eq!(dessert.entries[0].description, "Pie");
}

#[tokio::test]
async fn delete_empties_the_group_before_the_remote_call() {
    let gateway = Arc::new(MemoryGateway::with_entries(vec![test_entry(
        "1",
        "Sam",
        "Pie",
        Some("dessert"),
    )]));
    let mut board = Board::with_shared(gateway.clone());
    board.load().await.unwrap();

    let pending = board.delete(&EntryId::from("1"));

    assert!(board.groups().iter().all(|a| a.entries.is_empty()));
    assert_eq!(gateway.stored().len(), 1);

    pending.await.unwrap();
    assert!(gateway.stored().is_empty());
}
