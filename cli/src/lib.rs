// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface and terminal board of potluck.

mod cli;
mod cmd_board;
mod cmd_entry;
mod cmd_generate_completion;
mod cmd_list;
mod config;
mod entry_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
