//! Notifications about changes to the undo log.

#[cfg(feature = "std")]
use std::sync::mpsc::{Sender, SyncSender};

/// The optional receiver of an undo log's signals.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S> {
    slot: Option<S>,
}

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket { slot: Some(slot) }
    }

    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.slot.replace(slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.slot.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket { slot: None }
    }
}

impl<S: Slot> Socket<S> {
    /// Tells the slot that the log went from `before` to `after` entries.
    ///
    /// `Undo` is sent first, and only when the log became empty or stopped
    /// being empty. `Len` follows whenever the count differs.
    pub fn len_changed(&mut self, before: usize, after: usize) {
        if let Some(slot) = &mut self.slot {
            if (before == 0) != (after == 0) {
                slot.on_emit(Signal::Undo(after != 0));
            }
            if before != after {
                slot.on_emit(Signal::Len(after));
            }
        }
    }
}

/// A change in the undo log that a [`Slot`] is told about.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// There is now something to undo (`true`), or nothing left (`false`).
    Undo(bool),
    /// The log now holds this many actions.
    Len(usize),
}

/// Receives [`Signal`]s from an [`UndoLog`](crate::UndoLog).
///
/// Typical use is keeping an undo button's enabled state or an action
/// counter in sync with the log, without polling it after every change.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use textlist::{make_add_undo, Signal, TextItem, TextList, UndoLog};
/// let (sender, receiver) = mpsc::channel::<Signal>();
/// let mut iter = receiver.try_iter();
///
/// let list = TextList::new();
/// let mut log = UndoLog::builder().connect(sender).build();
///
/// log.push(make_add_undo(TextItem::with_id("1", "a", false)));
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Len(1)));
/// assert_eq!(iter.next(), None);
///
/// log.undo(&list);
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Len(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Called once per signal, in the order the signals occur.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

#[cfg(feature = "std")]
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.send(signal);
    }
}

#[cfg(feature = "std")]
impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        let _ = self.send(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn signals(before: usize, after: usize) -> Vec<Signal> {
        let mut seen = Vec::new();
        let mut socket = Socket::new(|s: Signal| seen.push(s));
        socket.len_changed(before, after);
        drop(socket);
        seen
    }

    #[test]
    fn first_entry() {
        assert_eq!(signals(0, 1), [Signal::Undo(true), Signal::Len(1)]);
    }

    #[test]
    fn last_entry_removed() {
        assert_eq!(signals(1, 0), [Signal::Undo(false), Signal::Len(0)]);
    }

    #[test]
    fn count_only() {
        assert_eq!(signals(3, 2), [Signal::Len(2)]);
        assert_eq!(signals(2, 3), [Signal::Len(3)]);
    }

    #[test]
    fn unchanged_is_silent() {
        assert!(signals(0, 0).is_empty());
        assert!(signals(4, 4).is_empty());
    }

    #[test]
    fn disconnected_is_silent() {
        let mut seen = Vec::new();
        let mut socket = Socket::new(|s: Signal| seen.push(s));
        assert!(socket.disconnect().is_some());
        socket.len_changed(0, 1);
        drop(socket);
        assert!(seen.is_empty());
    }
}
