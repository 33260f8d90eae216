//! The list and its undo log kept together as one unit of state.

use crate::socket::Slot;
use crate::{
    make_add_undo, make_delete_item_undo, make_delete_selected_undo, TextItem, TextList,
    UndoAction, UndoLog,
};
use log::debug;

/// A [`TextList`] paired with the [`UndoLog`] that records its mutations.
///
/// Every method reads the current list and log and replaces both before it
/// returns, so the two never drift apart. An action is pushed only when a
/// mutation changed the list. Toggling the selection is never recorded.
///
/// The state is a plain value. If it is shared between threads, put the
/// whole state behind one lock so each operation runs on its own.
///
/// # Examples
/// ```
/// # use textlist::TextListState;
/// let mut state = TextListState::new();
/// let id = state.add_item("  milk ").unwrap().id.clone();
/// state.add_item("   ");
/// assert_eq!(state.items().len(), 1);
/// assert_eq!(state.undo_log().len(), 1);
///
/// state.toggle_item_selection(&id);
/// assert_eq!(state.delete_selected(), 1);
/// assert!(state.items().is_empty());
///
/// assert!(state.undo());
/// assert_eq!(state.items()[0].value, "milk");
/// assert!(!state.items()[0].selected);
/// assert!(state.undo());
/// assert!(state.items().is_empty());
/// assert!(!state.undo());
/// ```
#[derive(Debug)]
pub struct TextListState<S = ()> {
    items: TextList,
    undo_log: UndoLog<UndoAction, S>,
}

impl TextListState {
    /// Returns an empty state.
    pub fn new() -> TextListState {
        TextListState::with_items(TextList::new())
    }

    /// Returns a state holding `items` and an empty undo log.
    pub fn with_items(items: TextList) -> TextListState {
        TextListState::from_parts(items, UndoLog::new())
    }
}

impl Default for TextListState {
    fn default() -> TextListState {
        TextListState::new()
    }
}

impl<S> TextListState<S> {
    /// Returns a state from an existing list and log.
    pub fn from_parts(items: TextList, undo_log: UndoLog<UndoAction, S>) -> TextListState<S> {
        TextListState { items, undo_log }
    }

    /// Consumes the state, returning the list and the log.
    pub fn into_parts(self) -> (TextList, UndoLog<UndoAction, S>) {
        (self.items, self.undo_log)
    }

    /// Returns the current list.
    pub fn items(&self) -> &TextList {
        &self.items
    }

    /// Returns the undo log.
    pub fn undo_log(&self) -> &UndoLog<UndoAction, S> {
        &self.undo_log
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.items.selected_count()
    }

    /// Returns `true` if there is something to undo.
    pub fn can_undo(&self) -> bool {
        self.undo_log.can_undo()
    }
}

impl<S: Slot> TextListState<S> {
    /// Appends an item holding the trimmed `raw` text.
    ///
    /// Returns the new item, or `None` if `raw` was blank, in which case
    /// neither the list nor the log changes.
    pub fn add_item(&mut self, raw: &str) -> Option<&TextItem> {
        let items = self.items.add(raw);
        if items.len() == self.items.len() {
            return None;
        }
        let added = items.last()?.clone();
        debug!("state: added item {}", added.id);
        self.undo_log.push(make_add_undo(added));
        self.items = items;
        self.items.last()
    }

    /// Removes the item with the given id.
    ///
    /// Returns the removed item, or `None` if no item matched.
    pub fn delete_item(&mut self, id: &str) -> Option<TextItem> {
        let deleted = self.items.get(id)?.clone();
        debug!("state: deleting item {}", deleted.id);
        self.items = self.items.remove_by_id(id);
        self.undo_log.push(make_delete_item_undo(deleted.clone()));
        Some(deleted)
    }

    /// Removes every selected item and returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.items.selected_items();
        let count = selected.len();
        if count == 0 {
            return 0;
        }
        debug!("state: deleting {} selected items", count);
        self.items = self.items.remove_selected();
        self.undo_log.push(make_delete_selected_undo(selected));
        count
    }

    /// Flips the selection of the item with the given id.
    pub fn toggle_item_selection(&mut self, id: &str) {
        self.items = self.items.toggle_selection(id);
    }

    /// Reverses the most recent recorded mutation.
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_log.undo(&self.items) {
            Some(items) => {
                self.items = items;
                true
            }
            None => false,
        }
    }
}
