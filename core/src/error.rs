// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use potluck_graphql::GraphQlError;

use crate::EntryId;

/// Errors of the potluck board.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote call failed.
    #[error(transparent)]
    Gateway(#[from] GraphQlError),

    /// An update was submitted while no entry is being edited.
    #[error("No entry is being edited")]
    NotEditing,

    /// No entry with the given id is on the board.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// The entry has no server-assigned id yet.
    #[error("Entry has not been saved yet")]
    Unsaved,

    /// A required form field is empty.
    #[error("The {0} is required")]
    Required(&'static str),
}
