use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Opaque, immutable identifier of a list item.
///
/// Generated ids are numeric. Persisted lists may also carry string ids,
/// which are kept and written back exactly as found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self::Num(raw)
    }

    /// Numeric value, for ids the generator hands out.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self::Num(raw)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Build a fresh, not yet completed item.
    ///
    /// The caller is responsible for passing already trimmed, non-empty text.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered collection of items. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<Item>,
}

impl UiState for TodoList {}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Largest numeric id in the list, used to seed id generation.
    /// String ids never collide with generated ones and are skipped.
    pub fn max_numeric_id(&self) -> Option<u64> {
        self.items.iter().filter_map(|item| item.id.as_number()).max()
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub(crate) fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub(crate) fn retain<F: FnMut(&Item) -> bool>(&mut self, keep: F) {
        self.items.retain(keep);
    }
}

impl From<Vec<Item>> for TodoList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
