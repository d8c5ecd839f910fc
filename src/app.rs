//! Explicit state container driven by a renderer.
//!
//! The renderer forwards input as [`AppEvent`]s, then re-reads
//! [`App::visible_items`] and [`App::view`] to draw. No global state.

use crate::config::Config;
use crate::model::{Filter, Item, ItemId, TodoList};
use crate::mvi::dispatch_mvi;
use crate::storage::{FileStorage, Storage};
use crate::store::{ItemStore, ListenerId, Mutation, SystemClock};
use crate::ui::{ViewIntent, ViewReducer, ViewState};
use crate::view::{self, Summary};

/// Input events coming from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Input box content changed.
    DraftChanged(String),
    /// Add button pressed: adds the current draft.
    Submit,
    /// Add the given text directly, leaving the draft alone.
    SubmitText(String),
    /// Item text clicked: toggles completion.
    ItemClicked(ItemId),
    DeleteClicked(ItemId),
    FilterClicked(Filter),
    ClearCompletedClicked,
    ThemeToggled,
}

pub struct App<S: Storage> {
    store: ItemStore<S>,
    /// Presentation state (MVI pattern).
    view: ViewState,
    /// Message of the last failed save, shown until a save succeeds.
    last_persist_error: Option<String>,
}

impl<S: Storage> App<S> {
    pub fn new(store: ItemStore<S>) -> Self {
        Self {
            store,
            view: ViewState::default(),
            last_persist_error: None,
        }
    }

    /// Handle one input event.
    ///
    /// Returns the store outcome for events that reach the list, `None` for
    /// presentation-only events.
    pub fn handle(&mut self, event: AppEvent) -> Option<Mutation> {
        let mutation = match event {
            AppEvent::DraftChanged(text) => {
                self.dispatch_view(ViewIntent::EditDraft(text));
                return None;
            }
            AppEvent::FilterClicked(filter) => {
                self.dispatch_view(ViewIntent::SelectFilter(filter));
                return None;
            }
            AppEvent::ThemeToggled => {
                self.dispatch_view(ViewIntent::ToggleTheme);
                return None;
            }
            AppEvent::Submit => {
                let draft = self.view.draft.clone();
                let mutation = self.store.add(&draft);
                // A blank draft stays in the input box
                if mutation.added().is_some() {
                    self.dispatch_view(ViewIntent::ClearDraft);
                }
                mutation
            }
            AppEvent::SubmitText(text) => self.store.add(&text),
            AppEvent::ItemClicked(id) => self.store.toggle_complete(&id),
            AppEvent::DeleteClicked(id) => self.store.delete(&id),
            AppEvent::ClearCompletedClicked => self.store.clear_completed(),
        };

        self.track_persist_error(&mutation);
        Some(mutation)
    }

    pub fn dispatch_view(&mut self, intent: ViewIntent) {
        dispatch_mvi!(self, view, ViewReducer, intent);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ItemStore<S> {
        &mut self.store
    }

    pub fn list(&self) -> &TodoList {
        self.store.list()
    }

    pub fn filter(&self) -> Filter {
        self.view.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.dispatch_view(ViewIntent::SelectFilter(filter));
    }

    pub fn dark_mode(&self) -> bool {
        self.view.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dispatch_view(ViewIntent::SetTheme { dark });
    }

    pub fn draft(&self) -> &str {
        &self.view.draft
    }

    /// Items visible under the current filter, in list order.
    pub fn visible_items(&self) -> Vec<&Item> {
        view::project(self.store.items(), self.view.filter)
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    /// Register a re-render hook fired after every list change.
    pub fn on_list_change(&mut self, listener: impl FnMut(&TodoList) + 'static) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn clear_persist_error(&mut self) {
        self.last_persist_error = None;
    }

    fn track_persist_error(&mut self, mutation: &Mutation) {
        if let Some(warning) = mutation.warning() {
            self.last_persist_error = Some(warning.to_string());
        } else if mutation.persisted() {
            self.last_persist_error = None;
        }
    }
}

impl App<FileStorage> {
    /// Open the file-backed list described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let store = ItemStore::open_with(
            config.file_storage(),
            config.storage.key.clone(),
            Box::new(SystemClock),
        );
        Self::new(store)
    }
}
