//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::cell::Cell;
use std::rc::Rc;

use tickbox::model::{Item, ItemId};
use tickbox::storage::{MemoryStorage, Storage, DEFAULT_KEY};
use tickbox::store::{Clock, ItemStore};

/// Clock whose time only moves when a test says so.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn at(millis: u64) -> Self {
        Self(Rc::new(Cell::new(millis)))
    }

    pub fn set(&self, millis: u64) {
        self.0.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.0.get()
    }
}

/// Store over fresh in-memory storage with a frozen clock.
pub fn memory_store() -> ItemStore<MemoryStorage> {
    store_over(MemoryStorage::new())
}

pub fn store_over<S: Storage>(storage: S) -> ItemStore<S> {
    ItemStore::open_with(storage, DEFAULT_KEY, Box::new(ManualClock::at(1_000)))
}

/// In-memory storage whose slot already holds `raw`.
pub fn seeded_storage(raw: &str) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage.insert_raw(DEFAULT_KEY, raw);
    storage
}

/// Add every text and return the new ids in order.
pub fn add_all<S: Storage>(store: &mut ItemStore<S>, texts: &[&str]) -> Vec<ItemId> {
    texts
        .iter()
        .map(|text| {
            store
                .add(text)
                .added()
                .expect("non-blank text should be added")
        })
        .collect()
}

pub fn texts(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.text.clone()).collect()
}
