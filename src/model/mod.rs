//! Core data model: items, the ordered list, and the filter selector.

mod filter;
mod item;

pub use filter::Filter;
pub use item::{Item, ItemId, TodoList};
