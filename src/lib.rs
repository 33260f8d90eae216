//! An ordered list of text items with selection and multi-level undo.
//!
//! Every change to a [`TextList`] produces a new list and leaves the old one
//! untouched. To make a change undoable, the caller records how to reverse
//! it as an [`UndoAction`] and pushes that onto an [`UndoLog`]. Undoing pops
//! the most recent action and applies its inverse to the current list.
//!
//! # Features
//!
//! * [`TextList`] provides the list mutations: add, remove by id, remove the
//!   selection, and toggle the selection of one item.
//! * [`UndoAction`] describes how to reverse one mutation, and is built with
//!   [`make_add_undo`], [`make_delete_selected_undo`] and [`make_delete_item_undo`].
//! * [`UndoLog`] is the LIFO stack of actions. It can be limited to the `N`
//!   most recent actions and can notify a [`Slot`] when it changes.
//! * [`TextListState`] keeps a list and its log together and decides when a
//!   mutation should be recorded.
//! * Restored items are merged back by sorting the whole list by id,
//!   see [`compare_ids`].
//! * Serialization of items, lists and actions is provided when the `serde`
//!   feature is enabled.
//! * Time stamps on log entries are provided when the `chrono` feature is enabled.
//! * Configurable, optionally colored, display of the log through
//!   [`UndoLog::display`].
//!
//! # Examples
//!
//! ```
//! use textlist::{make_add_undo, make_delete_selected_undo, undo, TextList, UndoLog};
//!
//! let list = TextList::new().add("a").add("b");
//! let mut log = UndoLog::new();
//!
//! let list_c = list.add("c");
//! log.push(make_add_undo(list_c[2].clone()));
//!
//! let id = list_c[0].id.clone();
//! let selected = list_c.toggle_selection(&id);
//! let removed = selected.remove_selected();
//! log.push(make_delete_selected_undo(selected.selected_items()));
//! assert_eq!(removed.len(), 2);
//!
//! let (restored, log) = undo(&removed, log);
//! assert_eq!(restored.len(), 3);
//! assert!(!restored.has_selected());
//!
//! let (list_again, log) = undo(&restored, log);
//! assert_eq!(list_again.len(), 2);
//! assert!(log.is_empty());
//! ```

#![no_std]
#![doc(html_root_url = "https://docs.rs/textlist")]
#![deny(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod action;
mod entry;
mod format;
mod id_order;
mod item;
mod list;
mod socket;
mod state;
pub mod undo_log;

pub use action::{
    make_add_undo, make_delete_item_undo, make_delete_selected_undo, Action, UndoAction,
};
pub use entry::Entry;
pub use id_order::compare_ids;
pub use item::{is_valid_value, TextItem};
pub use list::{InvalidItem, TextList};
pub use socket::{Signal, Slot};
pub use state::TextListState;
pub use undo_log::{undo, UndoLog};
