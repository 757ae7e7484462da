//! Key-value persistence port.
//!
//! The browser app backs [`StateStore`] with `window.localStorage`; tests use
//! [`MemoryStore`]. Writes of the snapshot go through [`replace`], which
//! removes the key before setting it so other tabs always receive a change
//! notification, even when the new value equals the old one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::error::BoardError;

/// String key-value storage.
pub trait StateStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, BoardError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend rejects the write (e.g. quota).
    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend rejects the delete.
    fn remove(&mut self, key: &str) -> Result<(), BoardError>;
}

/// Remove `key`, then set it to `value`.
///
/// # Errors
///
/// Propagates the first backend failure.
pub fn replace<S: StateStore + ?Sized>(store: &mut S, key: &str, value: &str) -> Result<(), BoardError> {
    store.remove(key)?;
    store.set(key, value)
}

/// A write observed by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set(String),
    Remove(String),
}

/// In-process store that also logs writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    ops: Vec<StoreOp>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes in the order they happened.
    #[must_use]
    pub fn ops(&self) -> &[StoreOp] {
        &self.ops
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.ops.push(StoreOp::Set(key.to_owned()));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), BoardError> {
        self.entries.remove(key);
        self.ops.push(StoreOp::Remove(key.to_owned()));
        Ok(())
    }
}
