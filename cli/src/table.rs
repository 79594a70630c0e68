// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.fmt(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    /// Column name, also used as the key in JSON output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

pub trait TableStyle {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Aligned plain-text rows, one line per record, without a header.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    indent: usize,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ",
            indent: 0,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let table: Vec<Vec<_>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_max_width(columns.len(), &table);
        for (i, (cells, row)) in table.iter().zip(data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}", "", indent = self.indent)?;

            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let is_last = j == columns.len() - 1;
                let pad = widths[j].saturating_sub(cell.width());
                let padded = match col.padding_direction() {
                    PaddingDirection::Left if is_last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{:pad$}", ""),
                    PaddingDirection::Right => format!("{:pad$}{cell}", ""),
                };

                match col.get_color(row) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }

                if !is_last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// A pretty-printed JSON array of objects keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }

    pub fn to_value<T, C: TableColumn<T>>(&self, columns: &[C], data: &[T]) -> serde_json::Value {
        data.iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| (col.name().into_owned(), col.format(row).into_owned().into()))
                    .collect::<serde_json::Map<_, _>>()
            })
            .collect()
    }
}

impl TableStyle for TableStyleJson {
    fn fmt<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let value = self.to_value(columns, data);
        let json = serde_json::to_string_pretty(&value).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

fn column_max_width(len: usize, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_width = vec![0; len];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
