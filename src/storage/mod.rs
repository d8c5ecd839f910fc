//! Named-slot persistence backends and the persisted record format.
//!
//! A backend stores opaque strings under keys; the codec turns a
//! [`TodoList`](crate::model::TodoList) into the JSON record array kept in
//! that slot and back.

pub mod codec;
mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Default slot key holding the serialized list.
pub const DEFAULT_KEY: &str = "todos";

/// Synchronous key/value persistence.
///
/// Writes must be all-or-nothing: after a failed `write` the previous value
/// of the slot is still readable.
pub trait Storage {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the slot's contents.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop the slot. Removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
