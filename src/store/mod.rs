//! The item store: authoritative list plus write-through persistence.
//!
//! Every mutation is reduced by [`ListReducer`], serialized and written to
//! the storage slot before the call returns. A failed write is reported as
//! a [`PersistWarning`] on the returned [`Mutation`]; the in-memory list is
//! never rolled back.

mod id;
mod intent;
mod reducer;

pub use id::{Clock, IdGenerator, SystemClock};
pub use intent::ListIntent;
pub use reducer::ListReducer;

use crate::error::PersistWarning;
use crate::model::{Item, ItemId, TodoList};
use crate::mvi::dispatch_mvi;
use crate::storage::{codec, Storage, DEFAULT_KEY};
use crate::view::{self, Summary};

/// Callback invoked with the new list after a mutation changed it.
pub type Listener = Box<dyn FnMut(&TodoList)>;

/// Handle returned by [`ItemStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Outcome of a store operation.
#[derive(Debug)]
#[must_use = "a mutation may carry a persistence warning"]
pub struct Mutation {
    changed: bool,
    persisted: bool,
    added: Option<ItemId>,
    warning: Option<PersistWarning>,
}

impl Mutation {
    fn unchanged() -> Self {
        Self {
            changed: false,
            persisted: false,
            added: None,
            warning: None,
        }
    }

    /// Whether the list differs from before the operation.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Whether the list was successfully written to storage.
    pub fn persisted(&self) -> bool {
        self.persisted
    }

    /// Id of the item created by an add, if one was created.
    pub fn added(&self) -> Option<ItemId> {
        self.added.clone()
    }

    pub fn warning(&self) -> Option<&PersistWarning> {
        self.warning.as_ref()
    }

    pub fn into_warning(self) -> Option<PersistWarning> {
        self.warning
    }

    /// True unless a write was attempted and failed.
    pub fn is_saved(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owner of the list and the only place it is mutated.
pub struct ItemStore<S: Storage> {
    list: TodoList,
    storage: S,
    key: String,
    ids: IdGenerator,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: Storage> ItemStore<S> {
    /// Restore the list from the default slot using the system clock.
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, DEFAULT_KEY, Box::new(SystemClock))
    }

    /// Restore the list from `key`.
    ///
    /// Missing, unreadable or malformed data all yield an empty list; the
    /// failure is logged and never returned.
    pub fn open_with(storage: S, key: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        let key = key.into();
        let list = load_list(&storage, &key);

        let mut ids = IdGenerator::new(clock);
        if let Some(max) = list.max_numeric_id() {
            ids.seed(max);
        }

        tracing::info!(key = %key, items = list.len(), "Item store opened");

        Self {
            list,
            storage,
            key,
            ids,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn summary(&self) -> Summary {
        view::summarize(self.list.items())
    }

    /// Storage slot this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Append a new item. Text is trimmed; blank text is ignored without
    /// touching storage.
    pub fn add(&mut self, text: &str) -> Mutation {
        let text = text.trim();
        if text.is_empty() {
            tracing::trace!("Ignoring blank item text");
            return Mutation::unchanged();
        }

        let id = self.ids.next_id(&self.list);
        let mut mutation = self.apply(ListIntent::Add {
            id: id.clone(),
            text: text.to_string(),
        });
        if mutation.changed {
            tracing::debug!(id = %id, "Item added");
            mutation.added = Some(id);
        }
        mutation
    }

    /// Flip completion of `id`. Unknown ids leave the list unchanged.
    pub fn toggle_complete(&mut self, id: &ItemId) -> Mutation {
        let mutation = self.apply(ListIntent::Toggle { id: id.clone() });
        if mutation.changed {
            tracing::debug!(id = %id, "Item toggled");
        }
        mutation
    }

    /// Remove `id`. Unknown ids leave the list unchanged.
    pub fn delete(&mut self, id: &ItemId) -> Mutation {
        let mutation = self.apply(ListIntent::Delete { id: id.clone() });
        if mutation.changed {
            tracing::debug!(id = %id, "Item deleted");
        }
        mutation
    }

    /// Remove every completed item.
    pub fn clear_completed(&mut self) -> Mutation {
        let before = self.list.len();
        let mutation = self.apply(ListIntent::ClearCompleted);
        if mutation.changed {
            tracing::debug!(removed = before - self.list.len(), "Completed items cleared");
        }
        mutation
    }

    /// Write the current list again, e.g. to retry after a warning.
    pub fn save(&mut self) -> Result<(), PersistWarning> {
        let encoded = codec::encode(&self.list).map_err(PersistWarning::Encode)?;
        self.storage.write(&self.key, &encoded)?;
        Ok(())
    }

    /// Register a listener called with the list after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(&TodoList) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false when the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn apply(&mut self, intent: ListIntent) -> Mutation {
        let before = self.list.clone();
        dispatch_mvi!(self, list, ListReducer, intent);
        let changed = self.list != before;

        let warning = match self.save() {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to persist list");
                Some(e)
            }
        };

        if changed {
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.list);
            }
        }

        Mutation {
            changed,
            persisted: warning.is_none(),
            added: None,
            warning,
        }
    }
}

impl<S: Storage> std::fmt::Debug for ItemStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("key", &self.key)
            .field("list", &self.list)
            .field("ids", &self.ids)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn load_list<S: Storage>(storage: &S, key: &str) -> TodoList {
    match storage.read(key) {
        Ok(Some(raw)) => match codec::decode(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding malformed persisted list");
                TodoList::new()
            }
        },
        Ok(None) => TodoList::new(),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read persisted list, starting empty");
            TodoList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FrozenClock(u64);

    impl Clock for FrozenClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    fn store() -> ItemStore<MemoryStorage> {
        ItemStore::open_with(MemoryStorage::new(), DEFAULT_KEY, Box::new(FrozenClock(100)))
    }

    #[test]
    fn add_returns_new_id() {
        let mut store = store();
        let first = store.add("a").added().unwrap();
        let second = store.add("b").added().unwrap();
        assert_eq!(first, ItemId::new(100));
        assert_eq!(second, ItemId::new(101));
    }

    #[test]
    fn blank_add_does_not_write() {
        let mut store = store();
        let mutation = store.add("   ");
        assert!(!mutation.changed());
        assert!(!mutation.persisted());
        assert!(mutation.added().is_none());
        assert!(store.storage().raw(DEFAULT_KEY).is_none());
    }

    #[test]
    fn unknown_toggle_still_writes_through() {
        let mut store = store();
        let mutation = store.toggle_complete(&ItemId::new(5));
        assert!(!mutation.changed());
        assert!(mutation.persisted());
        assert_eq!(store.storage().raw(DEFAULT_KEY), Some("[]"));
    }

    #[test]
    fn listeners_see_changes_only() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |list| sink.borrow_mut().push(list.len()));

        let _ = store.add("a");
        let _ = store.delete(&ItemId::new(999));
        let _ = store.add("b");
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = store();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        let _ = store.add("a");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        let _ = store.add("b");
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn failed_write_keeps_memory_and_warns() {
        let mut store = store();
        let _ = store.add("a");
        store.storage_mut().set_available(false);

        let mutation = store.add("b");
        assert!(mutation.changed());
        assert!(!mutation.persisted());
        assert!(matches!(
            mutation.warning(),
            Some(PersistWarning::Storage(StorageError::Unavailable { .. }))
        ));
        assert_eq!(store.len(), 2);

        store.storage_mut().set_available(true);
        store.save().unwrap();
        let reopened = ItemStore::open(store.storage().clone());
        assert_eq!(reopened.list(), store.list());
    }
}
