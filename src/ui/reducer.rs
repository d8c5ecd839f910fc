use crate::mvi::Reducer;
use crate::ui::intent::ViewIntent;
use crate::ui::state::ViewState;

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::SelectFilter(filter) => ViewState { filter, ..state },
            ViewIntent::ToggleTheme => ViewState {
                dark_mode: !state.dark_mode,
                ..state
            },
            ViewIntent::SetTheme { dark } => ViewState {
                dark_mode: dark,
                ..state
            },
            ViewIntent::EditDraft(draft) => ViewState { draft, ..state },
            ViewIntent::ClearDraft => ViewState {
                draft: String::new(),
                ..state
            },
        }
    }
}
