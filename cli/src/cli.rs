// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use potluck_core::{APP_NAME, Layout};
use potluck_graphql::GraphQlClient;
use tracing_subscriber::EnvFilter;

use crate::cmd_board::CmdBoard;
use crate::cmd_entry::{CmdAdd, CmdDelete, CmdEdit};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::CmdList;
use crate::config::parse_config;

/// Run the potluck command-line interface.
///
/// A failed command is printed, then returned so the process exits non-zero.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    report(result)
}

fn report(result: Result<(), Box<dyn Error>>) -> Result<(), Box<dyn Error>> {
    if let Err(e) = &result {
        println!("{} {}", "Error:".red(), e);
    }
    result
}

/// Logs go to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Sign up for the potluck: who brings which dish, dessert or drink.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // list when no subcommand is given
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $POTLUCK_CONFIG, then \
$XDG_CONFIG_HOME/potluck/config.toml on Linux and MacOS, \
%APPDATA%/potluck/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdList::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdBoard::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let (command, config) = match matches.subcommand() {
            Some((CmdList::NAME, sub)) => (List(CmdList::from(sub)), get_config(sub)),
            Some((CmdAdd::NAME, sub)) => (Add(CmdAdd::from(sub)?), get_config(sub)),
            Some((CmdEdit::NAME, sub)) => (Edit(CmdEdit::from(sub)), get_config(sub)),
            Some((CmdDelete::NAME, sub)) => (Delete(CmdDelete::from(sub)), get_config(sub)),
            Some((CmdBoard::NAME, sub)) => (Board(CmdBoard::from(sub)), get_config(sub)),
            Some((CmdGenerateCompletion::NAME, sub)) => (
                GenerateCompletion(CmdGenerateCompletion::from(sub)),
                None,
            ),
            None => (List(CmdList::new()), get_config(&matches)),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the entries
    List(CmdList),

    /// Add an entry
    Add(CmdAdd),

    /// Change the description of an entry
    Edit(CmdEdit),

    /// Delete entries
    Delete(CmdDelete),

    /// Open the interactive board
    Board(CmdBoard),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            List(a)   => Self::run_with(config, |x, l| a.run(x, l).boxed_local()).await,
            Add(a)    => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Edit(a)   => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Delete(a) => Self::run_with(config, |x, _| a.run(x).boxed_local()).await,
            Board(a)  => Self::run_with(config, |x, l| a.run(x, l).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(
            &'a mut potluck_core::Board<GraphQlClient>,
            Layout,
        ) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut board = potluck_core::Board::connect(&config)?;

        f(&mut board, config.layout).await
    }
}

fn get_config(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}
