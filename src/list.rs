//! The ordered list of items and its mutations.

use crate::TextItem;
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};
use core::ops::Deref;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`TextItem`]s with unique ids.
///
/// Every mutation takes `&self` and returns a new list, so the input list
/// is left as it was. This makes it easy to keep old versions of the list
/// around and to compare them.
///
/// # Examples
/// ```
/// # use textlist::TextList;
/// let empty = TextList::new();
/// let list = empty.add("  milk ");
/// assert!(empty.is_empty());
/// assert_eq!(list.len(), 1);
/// assert_eq!(list[0].value, "milk");
///
/// let id = list[0].id.clone();
/// let list = list.toggle_selection(&id);
/// assert_eq!(list.selected_count(), 1);
/// assert!(list.remove_selected().is_empty());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<TextItem>", try_from = "Vec<TextItem>")
)]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct TextList {
    items: Vec<TextItem>,
}

impl TextList {
    /// Returns an empty list.
    pub const fn new() -> TextList {
        TextList { items: Vec::new() }
    }

    /// Builds a list from existing items.
    ///
    /// # Errors
    /// Returns [`InvalidItem::BlankValue`] if an item's value is empty after
    /// trimming, and [`InvalidItem::DuplicateId`] if two items share an id.
    pub fn from_items(items: Vec<TextItem>) -> Result<TextList, InvalidItem> {
        for (i, item) in items.iter().enumerate() {
            if !item.is_valid() {
                return Err(InvalidItem::BlankValue(item.id.clone()));
            }
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(InvalidItem::DuplicateId(item.id.clone()));
            }
        }
        Ok(TextList { items })
    }

    /// Wraps items that are already known to have unique ids.
    pub(crate) fn from_vec_unchecked(items: Vec<TextItem>) -> TextList {
        TextList { items }
    }

    /// Consumes the list, returning the items.
    pub fn into_items(self) -> Vec<TextItem> {
        self.items
    }

    /// Returns the item with the given id.
    pub fn get(&self, id: &str) -> Option<&TextItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns `true` if an item has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Returns `true` if at least one item is selected.
    pub fn has_selected(&self) -> bool {
        self.items.iter().any(|item| item.selected)
    }

    /// Returns the selected items, in list order.
    pub fn selected_items(&self) -> Vec<TextItem> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .cloned()
            .collect()
    }

    /// Returns a new list with an item holding the trimmed `raw` appended.
    ///
    /// If `raw` is empty after trimming the returned list is equal to `self`.
    #[must_use]
    pub fn add(&self, raw: &str) -> TextList {
        match TextItem::new(raw) {
            Some(item) => {
                trace!("add: appending item {}", item.id);
                let mut items = self.items.clone();
                items.push(item);
                TextList { items }
            }
            None => {
                trace!("add: ignoring blank value");
                self.clone()
            }
        }
    }

    /// Returns a new list without the item with the given id.
    #[must_use]
    pub fn remove_by_id(&self, id: &str) -> TextList {
        trace!("remove_by_id: {}", id);
        self.filter(|item| item.id != id)
    }

    /// Returns a new list holding only the unselected items.
    #[must_use]
    pub fn remove_selected(&self) -> TextList {
        trace!("remove_selected: {} selected", self.selected_count());
        self.filter(|item| !item.selected)
    }

    /// Returns a new list where the item with the given id has its
    /// selection flipped.
    #[must_use]
    pub fn toggle_selection(&self, id: &str) -> TextList {
        trace!("toggle_selection: {}", id);
        self.map_matching(id, TextItem::toggle)
    }

    /// Returns a new list where the item with the given id is selected.
    #[must_use]
    pub fn select(&self, id: &str) -> TextList {
        self.map_matching(id, TextItem::select)
    }

    /// Returns a new list where the item with the given id is not selected.
    #[must_use]
    pub fn deselect(&self, id: &str) -> TextList {
        self.map_matching(id, TextItem::deselect)
    }

    /// Returns a new list where no item is selected.
    #[must_use]
    pub fn deselect_all(&self) -> TextList {
        TextList {
            items: self.items.iter().map(TextItem::deselect).collect(),
        }
    }

    fn filter(&self, keep: impl Fn(&TextItem) -> bool) -> TextList {
        TextList {
            items: self.items.iter().filter(|&item| keep(item)).cloned().collect(),
        }
    }

    fn map_matching(&self, id: &str, f: impl Fn(&TextItem) -> TextItem) -> TextList {
        let items = self
            .items
            .iter()
            .map(|item| if item.id == id { f(item) } else { item.clone() })
            .collect();
        TextList { items }
    }
}

impl Deref for TextList {
    type Target = [TextItem];

    fn deref(&self) -> &[TextItem] {
        &self.items
    }
}

impl AsRef<[TextItem]> for TextList {
    fn as_ref(&self) -> &[TextItem] {
        &self.items
    }
}

impl TryFrom<Vec<TextItem>> for TextList {
    type Error = InvalidItem;

    fn try_from(items: Vec<TextItem>) -> Result<TextList, InvalidItem> {
        TextList::from_items(items)
    }
}

impl From<TextList> for Vec<TextItem> {
    fn from(list: TextList) -> Vec<TextItem> {
        list.items
    }
}

impl<'a> IntoIterator for &'a TextList {
    type Item = &'a TextItem;
    type IntoIter = core::slice::Iter<'a, TextItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for TextList {
    type Item = TextItem;
    type IntoIter = alloc::vec::IntoIter<TextItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Error returned when existing items can not form a [`TextList`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidItem {
    /// Two items share this id.
    DuplicateId(String),
    /// The item with this id has a value that is empty after trimming.
    BlankValue(String),
}

impl Display for InvalidItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InvalidItem::DuplicateId(id) => write!(f, "duplicate item id `{}`", id),
            InvalidItem::BlankValue(id) => write!(f, "item `{}` has a blank value", id),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidItem {}
