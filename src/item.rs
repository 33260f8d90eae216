//! A single entry of the list.

use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A text entry with an identity and a selection flag.
///
/// Items are never changed in place. The methods that change the
/// selection flag return a new item with the same `id` and `value`.
///
/// # Examples
/// ```
/// # use textlist::TextItem;
/// let item = TextItem::with_id("1", "milk", false);
/// let toggled = item.toggle();
/// assert!(!item.selected);
/// assert!(toggled.selected);
/// assert_eq!(toggled.id, item.id);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TextItem {
    /// Unique, opaque identifier.
    pub id: String,
    /// The trimmed text.
    pub value: String,
    /// If the item is currently selected.
    pub selected: bool,
}

impl TextItem {
    /// Creates an unselected item with a freshly generated id.
    ///
    /// Returns `None` if `raw` is empty after trimming.
    pub fn new(raw: &str) -> Option<TextItem> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(TextItem {
            id: generate_id(),
            value: value.to_string(),
            selected: false,
        })
    }

    /// Creates an item with a caller-chosen id.
    ///
    /// Used for seed data and for items coming from outside the crate.
    /// The value is stored as given, without trimming or checking it.
    /// [`TextList::from_items`](crate::TextList::from_items) rejects items
    /// whose value is blank.
    pub fn with_id(id: impl Into<String>, value: impl Into<String>, selected: bool) -> TextItem {
        TextItem {
            id: id.into(),
            value: value.into(),
            selected,
        }
    }

    /// Returns a copy with `selected` flipped.
    #[must_use]
    pub fn toggle(&self) -> TextItem {
        self.with_selected(!self.selected)
    }

    /// Returns a selected copy.
    #[must_use]
    pub fn select(&self) -> TextItem {
        self.with_selected(true)
    }

    /// Returns an unselected copy.
    #[must_use]
    pub fn deselect(&self) -> TextItem {
        self.with_selected(false)
    }

    /// Returns `true` if the value is non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        is_valid_value(&self.value)
    }

    fn with_selected(&self, selected: bool) -> TextItem {
        TextItem {
            id: self.id.clone(),
            value: self.value.clone(),
            selected,
        }
    }
}

impl Display for TextItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Returns `true` if `raw` would be accepted by [`TextList::add`](crate::TextList::add).
pub fn is_valid_value(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims() {
        let item = TextItem::new("  x  ").unwrap();
        assert_eq!(item.value, "x");
        assert!(!item.selected);
    }

    #[test]
    fn new_rejects_blank() {
        assert!(TextItem::new("").is_none());
        assert!(TextItem::new("   ").is_none());
        assert!(TextItem::new("\t\n").is_none());
    }

    #[test]
    fn ids_differ() {
        let a = TextItem::new("a").unwrap();
        let b = TextItem::new("a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn selection_copies() {
        let item = TextItem::with_id("7", "seven", true);
        assert!(!item.deselect().selected);
        assert!(item.select().selected);
        assert!(!item.toggle().selected);
        assert!(item.selected);
    }

    #[test]
    fn valid_value() {
        assert!(is_valid_value(" a "));
        assert!(!is_valid_value(" \t "));
        assert!(!TextItem::with_id("1", "  ", false).is_valid());
    }
}
