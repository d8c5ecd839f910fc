//! View projection: the visible subset of the list for a filter.
//!
//! Pure functions over a slice of items; nothing here mutates or stores
//! state.

use crate::model::{Filter, Item};

/// Items visible under `filter`, in list order.
pub fn project(items: &[Item], filter: Filter) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| filter.matches(item.completed))
        .collect()
}

/// Like [`project`], taking the filter by name. Unrecognized names show
/// everything.
pub fn project_named<'a>(items: &'a [Item], filter: &str) -> Vec<&'a Item> {
    project(items, Filter::parse(filter))
}

/// Item counts per filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Summary {
    pub fn count(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }

    pub fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

pub fn summarize(items: &[Item]) -> Summary {
    let completed = items.iter().filter(|item| item.completed).count();
    Summary {
        total: items.len(),
        active: items.len() - completed,
        completed,
    }
}
