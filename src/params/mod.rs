//! Chain parameters.

mod chain_config;

pub use chain_config::{AposParams, ChainConfig, CliqueParams, ConsensusType};
