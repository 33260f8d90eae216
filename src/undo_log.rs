//! A LIFO log of undo actions.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::{Slot, Socket};
use crate::{Action, Entry, UndoAction};
use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use core::fmt;
use core::num::NonZeroUsize;
use log::debug;

/// A LIFO stack of actions that reverse earlier mutations.
///
/// One action is pushed for every mutation that actually changed the list,
/// and [`undo`](UndoLog::undo) pops the most recent one and applies its
/// inverse. There is no redo.
///
/// # Examples
/// ```
/// # use textlist::{make_add_undo, TextList, UndoLog};
/// let list = TextList::new();
/// let mut log = UndoLog::new();
///
/// let list = list.add("a");
/// log.push(make_add_undo(list[0].clone()));
/// let list = list.add("b");
/// log.push(make_add_undo(list[1].clone()));
///
/// let list = log.undo(&list).unwrap();
/// assert_eq!(list.len(), 1);
/// let list = log.undo(&list).unwrap();
/// assert!(list.is_empty());
/// assert!(log.undo(&list).is_none());
/// ```
pub struct UndoLog<A = UndoAction, S = ()> {
    pub(crate) entries: VecDeque<Entry<A>>,
    limit: NonZeroUsize,
    socket: Socket<S>,
}

impl<A> UndoLog<A> {
    /// Returns a new, empty log without a limit.
    pub fn new() -> UndoLog<A> {
        UndoLog::builder().build()
    }

    /// Returns a builder for a log.
    pub fn builder() -> Builder<A> {
        Builder::default()
    }
}

impl<A, S> UndoLog<A, S> {
    /// Reserves capacity for at least `additional` more actions.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the capacity of the log.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the number of actions in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the limit of the log.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns `true` if the log can undo.
    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(slot)
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns the action the next call to [`undo`](UndoLog::undo) would apply.
    pub fn peek(&self) -> Option<&A> {
        self.entries.back().map(|entry| &entry.action)
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry<A>> {
        self.entries.iter()
    }

    /// Returns a structure for configurable formatting of the log.
    pub fn display(&self) -> Display<A, S> {
        Display::from(self)
    }
}

impl<A, S: Slot> UndoLog<A, S> {
    /// Pushes the action on top of the log.
    ///
    /// If the limit is reached the oldest action is dropped.
    pub fn push(&mut self, action: A) {
        let old_len = self.len();
        if old_len == self.limit() {
            debug!("undo log: limit {} reached, dropping oldest action", self.limit());
            self.entries.pop_front();
        }
        self.entries.push_back(Entry::from(action));
        let len = self.len();
        debug!("undo log: pushed action, {} recorded", len);
        self.socket.len_changed(old_len, len);
    }

    /// Removes the most recent action and returns it without applying it.
    pub fn pop(&mut self) -> Option<A> {
        let entry = self.entries.pop_back()?;
        let len = self.len();
        debug!("undo log: popped action, {} recorded", len);
        self.socket.len_changed(len + 1, len);
        Some(entry.into_action())
    }

    /// Removes all actions from the log without applying them.
    pub fn clear(&mut self) {
        let old_len = self.len();
        self.entries.clear();
        self.socket.len_changed(old_len, 0);
    }
}

impl<A: Action, S: Slot> UndoLog<A, S> {
    /// Pops the most recent action and returns `target` with it reversed.
    ///
    /// Returns `None` if the log is empty.
    pub fn undo(&mut self, target: &A::Target) -> Option<A::Target> {
        self.pop().map(|action| action.undo(target))
    }
}

impl<A: fmt::Display, S> UndoLog<A, S> {
    /// Returns the description of the action which will be undone
    /// in the next call to [`undo`](UndoLog::undo).
    pub fn undo_text(&self) -> Option<String> {
        self.peek().map(ToString::to_string)
    }
}

/// Pops the most recent action from `log` and applies its inverse to `target`.
///
/// If `log` is empty, a copy of `target` and the unchanged log are returned.
///
/// # Examples
/// ```
/// # use textlist::{make_delete_item_undo, undo, TextItem, TextList, UndoLog};
/// let list = TextList::from_items(vec![TextItem::with_id("1", "a", false)]).unwrap();
/// let removed = list[0].clone();
/// let list = list.remove_by_id("1");
///
/// let mut log = UndoLog::new();
/// log.push(make_delete_item_undo(removed));
///
/// let (list, log) = undo(&list, log);
/// assert_eq!(list.len(), 1);
/// assert!(log.is_empty());
///
/// let (list, log) = undo(&list, log);
/// assert_eq!(list.len(), 1);
/// assert!(log.is_empty());
/// ```
pub fn undo<A, S>(target: &A::Target, mut log: UndoLog<A, S>) -> (A::Target, UndoLog<A, S>)
where
    A: Action,
    A::Target: Clone,
    S: Slot,
{
    match log.undo(target) {
        Some(target) => (target, log),
        None => {
            debug!("undo log: nothing to undo");
            (target.clone(), log)
        }
    }
}

impl<A> Default for UndoLog<A> {
    fn default() -> UndoLog<A> {
        UndoLog::new()
    }
}

impl<A: Clone, S: Clone> Clone for UndoLog<A, S> {
    fn clone(&self) -> Self {
        UndoLog {
            entries: self.entries.clone(),
            limit: self.limit,
            socket: self.socket.clone(),
        }
    }
}

impl<A: fmt::Debug, S: fmt::Debug> fmt::Debug for UndoLog<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UndoLog")
            .field("entries", &self.entries)
            .field("limit", &self.limit)
            .field("socket", &self.socket)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn item(id: &str) -> TextItem {
        TextItem::with_id(id, id, false)
    }

    #[test]
    fn lifo() {
        let mut log = UndoLog::new();
        log.push(make_add_undo(item("1")));
        log.push(make_add_undo(item("2")));
        assert_eq!(log.pop(), Some(make_add_undo(item("2"))));
        assert_eq!(log.pop(), Some(make_add_undo(item("1"))));
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut log = UndoLog::builder().limit(2).build();
        log.push(make_add_undo(item("1")));
        log.push(make_add_undo(item("2")));
        log.push(make_add_undo(item("3")));
        assert_eq!(log.len(), 2);
        let ids: Vec<_> = log
            .entries()
            .map(|entry| match &entry.action {
                UndoAction::Add { item } => item.id.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn signals() {
        let signals = RefCell::new(Vec::new());
        let mut log = UndoLog::builder()
            .connect(|s: Signal| signals.borrow_mut().push(s))
            .build();
        log.push(make_add_undo(item("1")));
        log.push(make_add_undo(item("2")));
        log.pop();
        log.clear();
        log.clear();
        drop(log);
        assert_eq!(
            signals.into_inner(),
            vec![
                Signal::Undo(true),
                Signal::Len(1),
                Signal::Len(2),
                Signal::Len(1),
                Signal::Undo(false),
                Signal::Len(0),
            ]
        );
    }

    #[test]
    fn limit_signals_no_len_change() {
        let signals = RefCell::new(Vec::new());
        let mut log = UndoLog::builder()
            .limit(1)
            .connect(|s: Signal| signals.borrow_mut().push(s))
            .build();
        log.push(make_add_undo(item("1")));
        log.push(make_add_undo(item("2")));
        drop(log);
        assert_eq!(signals.into_inner(), vec![Signal::Undo(true), Signal::Len(1)]);
    }

    #[test]
    fn undo_text() {
        let mut log = UndoLog::new();
        assert_eq!(log.undo_text(), None);
        log.push(make_delete_item_undo(item("x")));
        assert_eq!(log.undo_text().as_deref(), Some("Delete `x`"));
    }

    #[test]
    fn free_undo_on_empty_log() {
        let list = TextList::new();
        let log: UndoLog = UndoLog::new();
        let (after, log) = undo(&list, log);
        assert_eq!(after, list);
        assert!(log.is_empty());
    }
}
