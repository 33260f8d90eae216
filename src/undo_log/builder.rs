use crate::socket::Socket;
use crate::UndoLog;
use alloc::collections::VecDeque;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

/// Builder for an [`UndoLog`].
///
/// # Examples
/// ```
/// # use textlist::{make_add_undo, Signal, TextItem, UndoLog};
/// let mut log = UndoLog::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|s: Signal| { dbg!(s); })
///     .build();
/// # log.push(make_add_undo(TextItem::with_id("1", "a", false)));
/// ```
#[derive(Debug)]
pub struct Builder<A, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<A>,
}

impl<A, S> Builder<A, S> {
    /// Sets the capacity for the log.
    pub fn capacity(mut self, capacity: usize) -> Builder<A, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the log.
    ///
    /// When the limit is reached, pushing a new action drops the oldest one.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<A, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Connects the slot.
    pub fn connect<T>(self, slot: T) -> Builder<A, T> {
        Builder {
            capacity: self.capacity,
            limit: self.limit,
            socket: Socket::new(slot),
            pd: PhantomData,
        }
    }

    /// Builds the log.
    pub fn build(self) -> UndoLog<A, S> {
        UndoLog {
            entries: VecDeque::with_capacity(self.capacity),
            limit: self.limit,
            socket: self.socket,
        }
    }
}

impl<A, S> Default for Builder<A, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
