//! Raw database accessors.
//!
//! Low-level typed reads and writes against the [`crate::storage`] tables.
//! Accessors are stateless: they derive the key, perform exactly one store
//! call, and translate the result. Retries and caching are left to callers.

mod error;
mod keys;
mod metadata;

pub use error::{ChainConfigError, ChainConfigErrorKind};
pub use keys::{config_key, CONFIG_KEY_LEN, CONFIG_PREFIX};
pub use metadata::{read_chain_config, write_chain_config};
