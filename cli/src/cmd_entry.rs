// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use futures::future;
use potluck_core::{Board, Category, Entry, EntryDraft, EntryId, Error as CoreError, Gateway};

use crate::entry_formatter::EntryFormatter;
use crate::tui;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,

    pub output_format: ArgOutputFormat,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Sign up with what you bring, opens a form when no name is given")
            .arg(arg!([NAME] "Who is signing up"))
            .arg(arg!([DESCRIPTION] "What they are bringing"))
            .arg(
                arg!(-t --category <CATEGORY> "Category of the contribution")
                    .value_parser(value_parser!(Category)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = matches.get_one::<String>("NAME").cloned();
        let description = matches.get_one::<String>("DESCRIPTION").cloned();
        let category = matches.get_one::<Category>("category").copied();

        // The form collects everything, so a partial command line is a mistake.
        if name.is_some() && description.is_none() {
            return Err("Description is required when a name is given".into());
        } else if name.is_none() && category.is_some() {
            return Err("Name and description are required when a category is given".into());
        }

        Ok(Self {
            name,
            description,
            category,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run<G: Gateway + 'static>(
        self,
        board: &mut Board<G>,
    ) -> Result<(), Box<dyn Error>> {
        let draft = match (self.name, self.description) {
            (Some(name), Some(description)) => EntryDraft {
                name,
                description,
                category: self.category,
            },
            _ => match tui::draft_entry()? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user canceled the new entry");
                    return Ok(());
                }
            },
        };
        draft.validate()?;

        tracing::debug!(?draft, "adding entry...");
        board.create(&draft).await?;

        let created: Vec<_> = board
            .entries()
            .iter()
            .rev()
            .find(|a| a.name == draft.name && a.description == draft.description)
            .cloned()
            .into_iter()
            .collect();
        print_entries(&created, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: EntryId,
    pub description: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change what an entry brings, opens an editor when no description is given")
            .arg(arg_id())
            .arg(arg!([DESCRIPTION] "The new description"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            description: matches.get_one::<String>("DESCRIPTION").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<G: Gateway + 'static>(
        self,
        board: &mut Board<G>,
    ) -> Result<(), Box<dyn Error>> {
        board.load().await?;
        let entry = board.begin_edit(&self.id)?.clone();

        let description = match self.description {
            Some(description) => description,
            None => match tui::edit_description(&entry)? {
                Some(description) => description,
                None => {
                    tracing::info!(id = %self.id, "user canceled the edit");
                    board.cancel_edit();
                    return Ok(());
                }
            },
        };
        if description.trim().is_empty() {
            return Err(CoreError::Required("description").into());
        }

        tracing::debug!(id = %self.id, description = %description, "updating entry...");
        board.update(&description).await?;

        let updated: Vec<_> = board
            .entries()
            .iter()
            .filter(|a| a.id.as_ref() == Some(&self.id))
            .cloned()
            .collect();
        print_entries(&updated, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub ids: Vec<EntryId>,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove entries from the list")
            .arg(
                arg!(<ID> ... "The ids of the entries to remove")
                    .value_parser(value_parser!(String)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let ids = matches
            .get_many::<String>("ID")
            .map(|ids| ids.map(|a| EntryId::from(a.as_str())).collect())
            .unwrap_or_default();
        Self { ids }
    }

    pub async fn run<G: Gateway + 'static>(
        self,
        board: &mut Board<G>,
    ) -> Result<(), Box<dyn Error>> {
        board.load().await?;

        let mut removed = Vec::with_capacity(self.ids.len());
        let mut pending = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            tracing::debug!(%id, "deleting entry...");
            removed.push(find_entry(board.entries(), id));
            pending.push(board.delete(id));
        }

        let results = future::join_all(pending).await;
        let mut failed = 0;
        for ((id, entry), result) in self.ids.iter().zip(removed).zip(results) {
            match (result, entry) {
                (Ok(()), Some(entry)) => println!(
                    "{} #{id} {}: {}",
                    "Deleted".green(),
                    entry.name,
                    entry.description
                ),
                (Ok(()), None) => println!("{} #{id}", "Deleted".green()),
                (Err(e), _) => {
                    failed += 1;
                    println!("{} #{id}: {e}", "Failed".red());
                }
            }
        }

        match failed {
            0 => Ok(()),
            n => Err(format!("{n} of {} deletes failed", self.ids.len()).into()),
        }
    }
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the entry").value_parser(value_parser!(String))
}

fn get_id(matches: &ArgMatches) -> EntryId {
    matches
        .get_one::<String>("id")
        .map(|a| EntryId::from(a.as_str()))
        .unwrap_or_else(|| unreachable!("id is required"))
}

fn find_entry(entries: &[Entry], id: &EntryId) -> Option<Entry> {
    entries.iter().find(|a| a.id.as_ref() == Some(id)).cloned()
}

fn print_entries(entries: &[Entry], output_format: ArgOutputFormat) {
    let formatter = EntryFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(entries));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cmd: Command, args: &[&str]) -> ArgMatches {
        let matches = Command::new("test")
            .subcommand(cmd)
            .try_get_matches_from(args)
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[test]
    fn parses_add_with_arguments() {
        let matches = parse(
            CmdAdd::command(),
            &["test", "add", "Sam", "Apple pie", "--category", "dessert"],
        );
        let cmd = CmdAdd::from(&matches).unwrap();
        assert_eq!(cmd.name.as_deref(), Some("Sam"));
        assert_eq!(cmd.description.as_deref(), Some("Apple pie"));
        assert_eq!(cmd.category, Some(Category::Dessert));
        assert_eq!(cmd.output_format, ArgOutputFormat::Table);
    }

    #[test]
    fn parses_add_with_legacy_category() {
        let matches = parse(CmdAdd::command(), &["test", "add", "Sam", "Pie", "-t", "desert"]);
        let cmd = CmdAdd::from(&matches).unwrap();
        assert_eq!(cmd.category, Some(Category::Dessert));
    }

    #[test]
    fn parses_add_without_arguments() {
        let matches = parse(CmdAdd::command(), &["test", "add"]);
        let cmd = CmdAdd::from(&matches).unwrap();
        assert!(cmd.name.is_none());
        assert!(cmd.description.is_none());
    }

    #[test]
    fn rejects_add_without_description() {
        let matches = parse(CmdAdd::command(), &["test", "add", "Sam"]);
        assert!(CmdAdd::from(&matches).is_err());
    }

    #[test]
    fn rejects_add_with_only_category() {
        let matches = parse(CmdAdd::command(), &["test", "add", "-t", "dish"]);
        assert!(CmdAdd::from(&matches).is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        let result = Command::new("test")
            .subcommand(CmdAdd::command())
            .try_get_matches_from(["test", "add", "Sam", "Pie", "-t", "snack"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_edit() {
        let matches = parse(CmdEdit::command(), &["test", "edit", "abc-123", "Cherry pie"]);
        let cmd = CmdEdit::from(&matches);
        assert_eq!(cmd.id, EntryId::from("abc-123"));
        assert_eq!(cmd.description.as_deref(), Some("Cherry pie"));
    }

    #[test]
    fn parses_edit_without_description() {
        let matches = parse(CmdEdit::command(), &["test", "edit", "abc-123"]);
        let cmd = CmdEdit::from(&matches);
        assert!(cmd.description.is_none());
    }

    #[test]
    fn parses_delete_ids() {
        let matches = parse(CmdDelete::command(), &["test", "rm", "1", "2"]);
        let cmd = CmdDelete::from(&matches);
        assert_eq!(cmd.ids, vec![EntryId::from("1"), EntryId::from("2")]);
    }
}
