use crate::format::Format;
use crate::{Entry, UndoLog};
use core::fmt::{self, Write};

/// Configurable display formatting for the [`UndoLog`].
///
/// Entries are listed newest first, each with its position in the log.
/// The entry the next undo would reverse is marked with `[HEAD]`.
///
/// # Examples
/// ```
/// # use textlist::{make_add_undo, TextItem, UndoLog};
/// let mut log = UndoLog::new();
/// log.push(make_add_undo(TextItem::with_id("1", "a", false)));
/// log.push(make_add_undo(TextItem::with_id("2", "b", false)));
///
/// let mut display = log.display();
/// display.detailed(false);
/// println!("{}", display);
/// ```
pub struct Display<'a, A, S> {
    log: &'a UndoLog<A, S>,
    format: Format,
}

impl<A, S> Display<'_, A, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    ///
    /// Detailed output puts each description on its own line and, with the
    /// `chrono` feature, shows when each action was recorded.
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Mark the next action to undo (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }
}

impl<A: fmt::Display, S> Display<'_, A, S> {
    fn fmt_list(&self, f: &mut fmt::Formatter, index: usize, entry: Option<&Entry<A>>) -> fmt::Result {
        self.format.index(f, index)?;

        #[cfg(feature = "chrono")]
        if let Some(entry) = entry {
            if self.format.detailed {
                self.format.timestamp(f, &entry.timestamp)?;
            }
        }

        self.format.labels(f, index, self.log.len())?;

        match entry {
            Some(entry) if self.format.detailed => {
                writeln!(f)?;
                self.format.message(f, entry)
            }
            Some(entry) => {
                f.write_char(' ')?;
                self.format.message(f, entry)?;
                writeln!(f)
            }
            None => writeln!(f),
        }
    }
}

impl<'a, A, S> From<&'a UndoLog<A, S>> for Display<'a, A, S> {
    fn from(log: &'a UndoLog<A, S>) -> Self {
        Display {
            log,
            format: Format::default(),
        }
    }
}

impl<A: fmt::Display, S> fmt::Display for Display<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.log.entries.iter().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}
