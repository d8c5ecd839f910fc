//! Intents for the item list.

use crate::model::ItemId;
use crate::mvi::Intent;

/// Mutations that can be dispatched to the list reducer.
///
/// Ids for new items are generated by the store before dispatch so the
/// reducer stays pure.
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// Append a new item. Blank text is a no-op.
    Add { id: ItemId, text: String },

    /// Flip completion of one item. Unknown ids are a no-op.
    Toggle { id: ItemId },

    /// Remove one item. Unknown ids are a no-op.
    Delete { id: ItemId },

    /// Drop every completed item, keeping the order of the rest.
    ClearCompleted,
}

impl Intent for ListIntent {}
