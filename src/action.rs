//! Recorded descriptions of how to reverse a list mutation.

use crate::id_order::sort_by_id;
use crate::{TextItem, TextList};
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base functionality for actions stored in an [`UndoLog`](crate::UndoLog).
///
/// An action is consumed when it is undone, and the undo produces a new
/// target instead of changing the old one.
pub trait Action {
    /// The target type.
    type Target;

    /// Returns `target` with the recorded mutation reversed.
    fn undo(self, target: &Self::Target) -> Self::Target;
}

/// How to reverse one mutation of a [`TextList`].
///
/// Build these with [`make_add_undo`], [`make_delete_selected_undo`] and
/// [`make_delete_item_undo`] right after the mutation they describe.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum UndoAction {
    /// `item` was appended.
    Add {
        /// The appended item.
        item: TextItem,
    },
    /// The selected items were removed.
    DeleteSelected {
        /// The removed items in their original relative order.
        #[cfg_attr(feature = "serde", serde(rename = "deletedItems"))]
        deleted_items: Vec<TextItem>,
    },
    /// A single item was removed.
    DeleteItem {
        /// The removed item.
        #[cfg_attr(feature = "serde", serde(rename = "deletedItem"))]
        deleted_item: TextItem,
    },
}

/// Records that `item` was appended to the list.
pub fn make_add_undo(item: TextItem) -> UndoAction {
    UndoAction::Add { item }
}

/// Records that `items` were removed by a delete of the selection.
pub fn make_delete_selected_undo(items: Vec<TextItem>) -> UndoAction {
    UndoAction::DeleteSelected {
        deleted_items: items,
    }
}

/// Records that `item` was removed.
pub fn make_delete_item_undo(item: TextItem) -> UndoAction {
    UndoAction::DeleteItem { deleted_item: item }
}

impl Action for UndoAction {
    type Target = TextList;

    /// Removes an added item, or restores deleted items.
    ///
    /// Restored items are always unselected, and after a restore the
    /// whole list is sorted by id, see [`compare_ids`](crate::compare_ids).
    fn undo(self, list: &TextList) -> TextList {
        match self {
            UndoAction::Add { item } => {
                debug!("undo add: removing item {}", item.id);
                list.remove_by_id(&item.id)
            }
            UndoAction::DeleteSelected { deleted_items } => {
                debug!("undo delete selected: restoring {} items", deleted_items.len());
                restore(list, deleted_items)
            }
            UndoAction::DeleteItem { deleted_item } => {
                debug!("undo delete item: restoring item {}", deleted_item.id);
                restore(list, Some(deleted_item))
            }
        }
    }
}

fn restore(list: &TextList, items: impl IntoIterator<Item = TextItem>) -> TextList {
    let mut restored = list.to_vec();
    restored.extend(items.into_iter().map(|item| TextItem {
        selected: false,
        ..item
    }));
    sort_by_id(&mut restored);
    TextList::from_vec_unchecked(restored)
}

impl Display for UndoAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UndoAction::Add { item } => write!(f, "Add `{}`", item.value),
            UndoAction::DeleteSelected { deleted_items } => match deleted_items.len() {
                1 => f.write_str("Delete 1 selected item"),
                n => write!(f, "Delete {} selected items", n),
            },
            UndoAction::DeleteItem { deleted_item } => {
                write!(f, "Delete `{}`", deleted_item.value)
            }
        }
    }
}
