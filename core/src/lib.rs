// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the potluck sign-up list: the entry model, the remote gateway
//! abstraction and the board that holds the transient view state.

mod board;
mod config;
mod entry;
mod error;
mod gateway;

pub use crate::board::{Board, Group, PendingDelete};
pub use crate::config::{APP_NAME, Config, Layout};
pub use crate::entry::{Category, Entry, EntryDraft, EntryId};
pub use crate::error::Error;
pub use crate::gateway::Gateway;
