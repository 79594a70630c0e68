// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! GraphQL client for the potluck sign-up backend (`listNotes`, `createNote`,
//! `updateNote` and `deleteNote` operations).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod client;
mod config;
mod error;
mod http;
mod request;
mod response;
mod types;

pub use crate::client::GraphQlClient;
pub use crate::config::{AuthMethod, GraphQlConfig};
pub use crate::error::GraphQlError;
pub use crate::request::{GraphQlRequest, documents};
pub use crate::response::{GraphQlResponse, ResponseError};
pub use crate::types::{CreateNoteInput, DeleteNoteInput, Note, NoteId, UpdateNoteInput};
