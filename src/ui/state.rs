use crate::model::Filter;
use crate::mvi::UiState;

/// Non-persisted presentation state. Every fresh load starts from
/// `Default`: all items visible, light theme, empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: Filter,
    pub dark_mode: bool,
    pub draft: String,
}

impl UiState for ViewState {}

impl ViewState {
    /// Label for the theme toggle button: names the mode it switches to.
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn is_filter_active(&self, filter: Filter) -> bool {
        self.filter == filter
    }
}
