//! Node process configuration.

mod node_config;

pub use node_config::{ConfigError, NodeConfig, DATADIR_DEFAULT_KEYSTORE, EPHEMERAL_KEYSTORE_PREFIX};
