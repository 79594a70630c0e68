// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use potluck_core::{Board, Gateway, Layout};

use crate::tui;

#[derive(Debug, Clone, Copy)]
pub struct CmdBoard {
    pub flat: bool,
}

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("tui")
            .about("Open the interactive sign-up board")
            .arg(arg!(--flat "Show every entry in server order instead of grouping by category"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            flat: matches.get_flag("flat"),
        }
    }

    pub async fn run<G: Gateway + 'static>(
        self,
        board: &mut Board<G>,
        layout: Layout,
    ) -> Result<(), Box<dyn Error>> {
        let layout = if self.flat { Layout::Flat } else { layout };
        tracing::debug!(?layout, "opening board...");
        tui::run_board(board, layout).await
    }
}
