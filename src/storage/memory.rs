//! In-memory key-value storage.
//!
//! This provides a simple in-memory implementation of [`KvGetter`] and
//! [`KvPutter`] for testing and ephemeral nodes. Data is lost on restart.

use super::traits::{KvGetter, KvPutter, StoreError};
use super::Table;
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, RwLock, RwLockReadGuard},
};

type TableData = BTreeMap<Vec<u8>, Vec<u8>>;
type StorageData = HashMap<Table, TableData>;

/// In-memory key-value database.
///
/// Cloning yields another handle onto the same data.
/// Thread-safe via `RwLock`.
///
/// # Example
///
/// ```ignore
/// use n42_rawdb::storage::{KvPutter, MemoryDb, Table};
///
/// let db = MemoryDb::new();
/// let mut tx = db.begin_rw();
/// tx.put(Table::ChainConfig, b"key", b"value")?;
/// tx.commit()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDb {
    data: Arc<RwLock<StorageData>>,
}

impl MemoryDb {
    /// Create a new empty in-memory database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a read-only transaction.
    ///
    /// The view holds the read lock until dropped, so it observes a single
    /// consistent snapshot.
    pub fn begin_ro(&self) -> Result<MemoryRoTx<'_>, StoreError> {
        let guard = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(MemoryRoTx { guard })
    }

    /// Begin a write transaction. Nothing is visible to other handles until
    /// [`MemoryRwTx::commit`].
    pub fn begin_rw(&self) -> MemoryRwTx {
        MemoryRwTx {
            data: Arc::clone(&self.data),
            pending: BTreeMap::new(),
        }
    }

    /// Get the number of entries in a table.
    pub fn len(&self, table: Table) -> Result<usize, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.get(&table).map_or(0, BTreeMap::len))
    }

    /// Check if every table is empty.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.values().all(BTreeMap::is_empty))
    }
}

impl KvGetter for MemoryDb {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.begin_ro()?.get_one(table, key)
    }
}

/// Writes directly through the handle, committing each put immediately.
impl KvPutter for MemoryDb {
    fn put(&mut self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        data.entry(table).or_default().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

/// Read-only transaction holding a read lock on the database.
#[derive(Debug)]
pub struct MemoryRoTx<'a> {
    guard: RwLockReadGuard<'a, StorageData>,
}

impl KvGetter for MemoryRoTx<'_> {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.guard.get(&table).and_then(|t| t.get(key)).cloned())
    }
}

/// Write transaction that buffers puts until committed.
///
/// Reads through the transaction observe its own pending writes.
/// Dropping the transaction without committing discards them.
#[derive(Debug)]
pub struct MemoryRwTx {
    data: Arc<RwLock<StorageData>>,
    pending: BTreeMap<(Table, Vec<u8>), Vec<u8>>,
}

impl MemoryRwTx {
    /// Apply all pending writes atomically, consuming the transaction.
    pub fn commit(self) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        for ((table, key), value) in self.pending {
            data.entry(table).or_default().insert(key, value);
        }
        Ok(())
    }

    /// Discard all pending writes.
    pub fn rollback(self) {}

    /// Number of writes buffered in this transaction.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl KvGetter for MemoryRwTx {
    fn get_one(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(value) = self.pending.get(&(table, key.to_vec())) {
            return Ok(Some(value.clone()));
        }
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.get(&table).and_then(|t| t.get(key)).cloned())
    }
}

impl KvPutter for MemoryRwTx {
    fn put(&mut self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.pending.insert((table, key.to_vec()), value.to_vec());
        Ok(())
    }
}
