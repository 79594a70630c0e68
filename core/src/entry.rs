// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use potluck_graphql::{Note, NoteId};

use crate::Error;

/// Server-assigned identifier of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Returns the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<NoteId> for EntryId {
    fn from(id: NoteId) -> Self {
        Self(id.as_str().to_string())
    }
}

impl From<&EntryId> for NoteId {
    fn from(id: &EntryId) -> Self {
        NoteId::new(id.0.clone())
    }
}

/// One sign-up record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    /// Assigned by the backend; `None` for an entry that never round-tripped.
    pub id: Option<EntryId>,

    /// Who signed up.
    pub name: String,

    /// What they are bringing.
    pub description: String,

    /// Raw category value as stored by the backend.
    #[serde(rename = "type")]
    pub category: Option<String>,
}

impl Entry {
    /// The recognized category of this entry, if any.
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(|a| a.parse().ok())
    }
}

impl From<Note> for Entry {
    fn from(note: Note) -> Self {
        Self {
            id: Some(note.id.into()),
            name: note.name,
            description: note.description,
            category: note.kind,
        }
    }
}

/// Display category of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A main or side dish.
    Dish,

    /// Something sweet.
    #[serde(alias = "desert")]
    #[cfg_attr(feature = "clap", value(alias = "desert"))]
    Dessert,

    /// Something to drink.
    Drink,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Dish, Category::Dessert, Category::Drink];

    /// The heading used when displaying a group of this category.
    pub fn title(self) -> &'static str {
        match self {
            Category::Dish => "Dish",
            Category::Dessert => "Dessert",
            Category::Drink => "Drink",
        }
    }

    /// The lowercase name shown to users and accepted on input.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Dish => CATEGORY_DISH,
            Category::Dessert => CATEGORY_DESSERT,
            Category::Drink => CATEGORY_DRINK,
        }
    }

    /// The value stored in the backend's `type` field.
    ///
    /// Desserts keep the `desert` spelling other clients of the same
    /// backend write and filter on.
    pub const fn wire_value(self) -> &'static str {
        match self {
            Category::Dessert => CATEGORY_DESSERT_LEGACY,
            _ => self.as_str(),
        }
    }
}

const CATEGORY_DISH: &str = "dish";
const CATEGORY_DESSERT: &str = "dessert";
const CATEGORY_DESSERT_LEGACY: &str = "desert";
const CATEGORY_DRINK: &str = "drink";

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_DISH => Ok(Category::Dish),
            CATEGORY_DESSERT | CATEGORY_DESSERT_LEGACY => Ok(Category::Dessert),
            CATEGORY_DRINK => Ok(Category::Drink),
            _ => Err(()),
        }
    }
}

/// Form values for a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Who signed up.
    pub name: String,

    /// What they are bringing.
    pub description: String,

    /// Optional display category.
    pub category: Option<Category>,
}

impl EntryDraft {
    /// Checks the required fields, as an input form does before submitting.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Required("name"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Required("description"));
        }
        Ok(())
    }
}
