use crate::model::Filter;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewIntent {
    SelectFilter(Filter),
    ToggleTheme,
    SetTheme { dark: bool },
    /// Input box content changed.
    EditDraft(String),
    ClearDraft,
}

impl Intent for ViewIntent {}
