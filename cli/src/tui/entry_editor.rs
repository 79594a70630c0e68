// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use potluck_core::Category;

use crate::tui::component_form::{Access, Form, FormItem, Input, RadioGroup};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::entry_store::EntryStoreLike;

pub type EntryForm<S> = Form<S, Box<dyn FormItem<S>>>;

pub fn new_entry_editor<S: EntryStoreLike + 'static>() -> SinglePage<S, EntryForm<S>> {
    SinglePage::new("What're you bringing?", new_entry_form())
}

pub fn new_entry_form<S: EntryStoreLike + 'static>() -> EntryForm<S> {
    Form::new(vec![
        Box::new(new_name()),
        Box::new(new_description()),
        Box::new(new_category()),
    ])
}

/// Editor for the description alone, as used when changing an entry.
pub fn new_description_editor<S: EntryStoreLike + 'static>(
    title: impl ToString,
) -> SinglePage<S, Form<S, Input<S, DescriptionAccess>>> {
    SinglePage::new(title, Form::new(vec![new_description()]))
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $placeholder:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn<S: EntryStoreLike>() -> Input<S, $acc> {
            Input::new($title).with_placeholder($placeholder)
        }

        pub struct $acc;

        impl<S: EntryStoreLike> Access<S, String> for $acc {
            fn get(store: &RefCell<S>) -> String {
                store.borrow().entry().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) {
                dispatcher.dispatch(Action::$action(value));
            }
        }
    };
}

new_input!(new_name, "Name", "Your Name", NameAccess, name, UpdateName);
new_input!(
    new_description,
    "Description",
    "What're you bringing?",
    DescriptionAccess,
    description,
    UpdateDescription
);

fn new_category<S: EntryStoreLike>() -> RadioGroup<S, Option<Category>, CategoryAccess> {
    let values: Vec<_> = std::iter::once(None)
        .chain(Category::ALL.into_iter().map(Some))
        .collect();
    let options = values
        .iter()
        .map(|a| a.map_or("None", Category::title).to_string())
        .collect();
    RadioGroup::new("Which one?", values, options)
}

pub struct CategoryAccess;

impl<S: EntryStoreLike> Access<S, Option<Category>> for CategoryAccess {
    fn get(store: &RefCell<S>) -> Option<Category> {
        store.borrow().entry().data.category
    }

    fn set(dispatcher: &mut Dispatcher, value: Option<Category>) {
        dispatcher.dispatch(Action::UpdateCategory(value));
    }
}
