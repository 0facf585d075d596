//! Storage capability traits.
//!
//! The accessors in [`crate::rawdb`] only ever need a single-key lookup and a
//! single-key upsert, so the store is narrowed to exactly those two operations.
//! Any engine (or a test fake) can back them.

use super::Table;

/// Error type for key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Engine-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Single-key read access to a table.
pub trait KvGetter {
    /// Get the value stored under `key` in `table`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Check if a key exists in the table.
    fn has(&self, table: Table, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get_one(table, key)?.is_some())
    }
}

/// Single-key write access to a table, within a caller-owned write context.
pub trait KvPutter {
    /// Insert or overwrite the value stored under `key` in `table`.
    fn put(&mut self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}

impl<T: KvGetter + ?Sized> KvGetter for &T {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_one(table, key)
    }
}

impl<T: KvGetter + ?Sized> KvGetter for &mut T {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_one(table, key)
    }
}

impl<T: KvPutter + ?Sized> KvPutter for &mut T {
    fn put(&mut self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).put(table, key, value)
    }
}

impl<T: KvGetter + ?Sized> KvGetter for Box<T> {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_one(table, key)
    }
}

impl<T: KvPutter + ?Sized> KvPutter for Box<T> {
    fn put(&mut self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).put(table, key, value)
    }
}
