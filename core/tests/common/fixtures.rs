// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use potluck_core::{Category, Entry, EntryDraft};

/// Creates a stored entry with the given id and raw category value.
#[must_use]
pub fn test_entry(id: &str, name: &str, description: &str, category: Option<&str>) -> Entry {
    Entry {
        id: Some(id.into()),
        name: name.to_string(),
        description: description.to_string(),
        category: category.map(str::to_string),
    }
}

/// Creates a draft for a new entry.
#[must_use]
pub fn test_draft(name: &str, description: &str, category: Option<Category>) -> EntryDraft {
    EntryDraft {
        name: name.to_string(),
        description: description.to_string(),
        category,
    }
}

/// A small list covering every category plus an uncategorized entry.
#[must_use]
pub fn sample_entries() -> Vec<Entry> {
    vec![
        test_entry("1", "Sam", "Pie", Some("dessert")),
        test_entry("2", "Lee", "Lasagna", Some("dish")),
        test_entry("3", "Kai", "Lemonade", Some("drink")),
        test_entry("4", "Max", "Napkins", None),
        test_entry("5", "Ray", "Salad", Some("dish")),
    ]
}
