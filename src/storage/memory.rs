use std::collections::HashMap;

use crate::error::StorageError;
use crate::storage::Storage;

/// In-memory storage, comparable to a browser's local storage.
///
/// Supports an optional per-slot byte quota and can be switched offline,
/// which makes both write-failure paths reproducible.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes larger than `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Seed a slot directly, bypassing quota checks.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(key.into(), value.into());
    }

    /// Raw contents of a slot.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// When false, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    fn check_available(&self, key: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available(key)?;
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                    needed: value.len(),
                });
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available(key)?;
        self.slots.remove(key);
        Ok(())
    }
}
