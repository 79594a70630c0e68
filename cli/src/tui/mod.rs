// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod board_store;
mod board_view;
mod component;
mod component_form;
mod component_page;
mod dispatcher;
mod entry_editor;
mod entry_store;

pub use app::{draft_entry, edit_description, run_board};
