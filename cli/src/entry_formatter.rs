// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::{Borrow, Cow};
use std::fmt;

use colored::{Color, Colorize};
use potluck_core::{Category, Entry, Group};

use crate::table::{Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct EntryFormatter {
    columns: Vec<EntryColumn>,
    format: ArgOutputFormat,
}

impl EntryFormatter {
    /// Formatter for a flat list, with a category column.
    pub fn new() -> Self {
        Self {
            columns: vec![
                EntryColumn::Id,
                EntryColumn::Name,
                EntryColumn::Category,
                EntryColumn::Description,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    /// Formatter for grouped sections, where the heading names the category.
    pub fn grouped() -> Self {
        Self {
            columns: vec![
                EntryColumn::Id,
                EntryColumn::Name,
                EntryColumn::Description,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, entries: &'a [Entry]) -> Display<'a> {
        Display {
            entries,
            formatter: self,
        }
    }

    pub fn format_groups<'a>(&'a self, groups: &'a [Group<'a>]) -> GroupsDisplay<'a> {
        GroupsDisplay {
            groups,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    entries: &'a [Entry],
    formatter: &'a EntryFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => {
                write!(f, "{}", Table::new(TableStyleJson::new(), columns, self.entries))
            }
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(TableStyleBasic::new(), columns, self.entries))
            }
        }
    }
}

#[derive(Debug)]
pub struct GroupsDisplay<'a> {
    groups: &'a [Group<'a>],
    formatter: &'a EntryFormatter,
}

impl fmt::Display for GroupsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let style = TableStyleJson::new();
                let value: serde_json::Map<_, _> = self
                    .groups
                    .iter()
                    .map(|g| {
                        let entries = style.to_value(columns, &g.entries);
                        (g.category.to_string(), entries)
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&value).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                for (i, group) in self.groups.iter().enumerate() {
                    if i > 0 {
                        write!(f, "\n\n")?;
                    }
                    let color = category_color(group.category);
                    let title = group.category.title().bold().color(color);
                    write!(f, "{title}")?;
                    if !group.entries.is_empty() {
                        let style = TableStyleBasic::new().with_indent(2);
                        write!(f, "\n{}", Table::new(style, columns, &group.entries))?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EntryColumn {
    Category,
    Description,
    Id,
    Name,
}

impl<E: Borrow<Entry>> TableColumn<E> for EntryColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EntryColumn::Category => "category",
            EntryColumn::Description => "description",
            EntryColumn::Id => "id",
            EntryColumn::Name => "name",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a E) -> Cow<'a, str> {
        let entry: &Entry = data.borrow();
        match self {
            EntryColumn::Category => match entry.category() {
                Some(category) => category.as_str().into(),
                None => entry.category.as_deref().unwrap_or_default().into(),
            },
            EntryColumn::Description => entry.description.as_str().into(),
            EntryColumn::Id => match &entry.id {
                Some(id) => format!("#{id}").into(),
                None => "".into(),
            },
            EntryColumn::Name => entry.name.as_str().into(),
        }
    }

    fn get_color(&self, data: &E) -> Option<Color> {
        match self {
            EntryColumn::Category => {
                let entry: &Entry = data.borrow();
                entry.category().map(category_color)
            }
            EntryColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Dish => Color::Yellow,
        Category::Dessert => Color::Magenta,
        Category::Drink => Color::Cyan,
    }
}
