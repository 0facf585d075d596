//! N42 raw database: chain configuration metadata.
//!
//! Persists the consensus settings of a chain in a key-value store, keyed by
//! the chain's genesis hash, and reads them back on node startup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Node startup                         │
//! │   NodeConfig (conf)          genesis import             │
//! └──────────────┬──────────────────────────┬───────────────┘
//!                │ read_chain_config        │ write_chain_config
//!                ▼                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │   rawdb: key derivation, JSON codec, ChainConfigError   │
//! └──────────────┬──────────────────────────┬───────────────┘
//!                │ KvGetter                 │ KvPutter
//!                ▼                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │   storage: Table::ChainConfig  (MemoryDb / MDBX / ...)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`rawdb`]: Chain configuration accessors and their error taxonomy
//! - [`storage`]: Narrow key-value capabilities and the in-memory engine
//! - [`params`]: The [`ChainConfig`] record
//! - [`conf`]: Node process configuration and keystore resolution
//!
//! # Usage
//!
//! ```ignore
//! use n42_rawdb::{read_chain_config, write_chain_config, ChainConfig, MemoryDb};
//!
//! let db = MemoryDb::new();
//! let mut tx = db.begin_rw();
//! write_chain_config(&mut tx, genesis_hash, Some(&ChainConfig::new(42)))?;
//! tx.commit()?;
//!
//! match read_chain_config(&db, genesis_hash) {
//!     Ok(config) => println!("loaded {config}"),
//!     Err(err) if err.is_not_found() => println!("genesis not imported yet"),
//!     Err(err) => return Err(err.into()),
//! }
//! ```

#![warn(unused_crate_dependencies)]

pub mod conf;
pub mod params;
pub mod rawdb;
pub mod storage;

// Re-export accessors
pub use rawdb::{
    config_key, read_chain_config, write_chain_config, ChainConfigError, ChainConfigErrorKind,
};

// Re-export chain parameters
pub use params::{AposParams, ChainConfig, CliqueParams, ConsensusType};

// Re-export storage types
pub use storage::{KvGetter, KvPutter, MemoryDb, StoreError, Table};

// Re-export node configuration
pub use conf::{ConfigError, NodeConfig};
