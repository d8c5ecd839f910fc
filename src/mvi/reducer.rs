//! Transition functions.

use super::intent::Intent;
use super::state::UiState;

/// Maps a state and one intent to the next state.
///
/// Reducers take no storage handle, clock or listener. Id assignment and
/// write-through happen in [`ItemStore`](crate::store::ItemStore) around the
/// call, so an intent that names a missing item simply returns the state it
/// was given.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents left to right.
    fn reduce_all(
        state: Self::State,
        intents: impl IntoIterator<Item = Self::Intent>,
    ) -> Self::State {
        intents.into_iter().fold(state, Self::reduce)
    }
}
