//! Key-value storage capabilities.
//!
//! This module defines the narrow store interface consumed by the raw
//! database accessors, separate from any concrete storage engine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  rawdb accessors                 │
//! │   read_chain_config        write_chain_config    │
//! └──────────┬──────────────────────────┬────────────┘
//!            │ KvGetter::get_one        │ KvPutter::put
//!            ▼                          ▼
//! ┌──────────────────────────────────────────────────┐
//! │        Table namespace ("ChainConfig", ...)      │
//! ├──────────────────────────────────────────────────┤
//! │  MemoryDb (this module)  │  MDBX / other engines │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Implementations
//!
//! - [`MemoryDb`]: Shared in-memory engine with read views and write transactions
//! - Future: MDBX-based persistent storage
//!
//! # Usage
//!
//! ```ignore
//! use n42_rawdb::storage::{KvGetter, KvPutter, MemoryDb, Table};
//!
//! let db = MemoryDb::new();
//! let mut tx = db.begin_rw();
//! tx.put(Table::ChainConfig, b"key", b"value")?;
//! tx.commit()?;
//!
//! let value = db.begin_ro().get_one(Table::ChainConfig, b"key")?;
//! ```

mod memory;
mod tables;
mod traits;

pub use memory::{MemoryDb, MemoryRoTx, MemoryRwTx};
pub use tables::{Table, ALL_TABLES};
pub use traits::{KvGetter, KvPutter, StoreError};
