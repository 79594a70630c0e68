// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use potluck_core::{Board, Gateway, Layout};

use crate::entry_formatter::EntryFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    /// Overrides the configured layout with [`Layout::Flat`].
    pub flat: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List who is bringing what")
            .arg(arg!(--flat "List every entry in server order, including uncategorized ones"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            flat: matches.get_flag("flat"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            flat: false,
            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run<G: Gateway + 'static>(
        self,
        board: &mut Board<G>,
        layout: Layout,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing entries...");
        board.load().await?;
        println!("{}", self.render(board, layout));
        Ok(())
    }

    fn render<G: Gateway + 'static>(&self, board: &Board<G>, layout: Layout) -> String {
        let layout = if self.flat { Layout::Flat } else { layout };
        match layout {
            Layout::Grouped => {
                let groups = board.groups();
                EntryFormatter::grouped()
                    .with_output_format(self.output_format)
                    .format_groups(&groups)
                    .to_string()
            }
            Layout::Flat => EntryFormatter::new()
                .with_output_format(self.output_format)
                .format(board.entries())
                .to_string(),
        }
    }
}
