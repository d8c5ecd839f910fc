//! Reducer for the item list.

use crate::model::{Item, TodoList};
use crate::mvi::Reducer;

use super::intent::ListIntent;

/// Pure list transitions.
///
/// Persistence, id generation and change notification are handled by
/// [`ItemStore`](super::ItemStore) around the dispatch call.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = TodoList;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Add { id, text } => {
                let text = text.trim();
                // Ids stay unique even if a caller replays an old id
                if !text.is_empty() && !state.contains(&id) {
                    state.push(Item::new(id, text));
                }
                state
            }
            ListIntent::Toggle { id } => {
                if let Some(item) = state.get_mut(&id) {
                    item.completed = !item.completed;
                }
                state
            }
            ListIntent::Delete { id } => {
                state.retain(|item| item.id != id);
                state
            }
            ListIntent::ClearCompleted => {
                state.retain(|item| !item.completed);
                state
            }
        }
    }
}
