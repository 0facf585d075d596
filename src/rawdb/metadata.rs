//! Chain configuration metadata accessors.

use super::{config_key, ChainConfigError};
use crate::{
    params::ChainConfig,
    storage::{KvGetter, KvPutter, Table},
};
use alloy_primitives::B256;
use tracing::{debug, error, trace};

/// Retrieve the consensus settings stored for the given genesis hash.
///
/// An absent key and a zero-length value are both reported as
/// [`ChainConfigError::NotFound`].
pub fn read_chain_config<DB>(db: &DB, hash: B256) -> Result<ChainConfig, ChainConfigError>
where
    DB: KvGetter + ?Sized,
{
    let key = config_key(hash);
    trace!(target: "rawdb", %hash, "Reading chain config");

    let data = db
        .get_one(Table::ChainConfig, &key)
        .map_err(|source| ChainConfigError::ReadFailure { hash, source })?;

    let data = match data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(ChainConfigError::NotFound { hash }),
    };

    serde_json::from_slice(&data).map_err(|source| ChainConfigError::DecodeFailure { hash, source })
}

/// Write the chain config settings for the given genesis hash, replacing any
/// previous record.
///
/// `None` is rejected with [`ChainConfigError::InvalidArgument`] before the
/// store is touched.
pub fn write_chain_config<DB>(
    db: &mut DB,
    hash: B256,
    config: Option<&ChainConfig>,
) -> Result<(), ChainConfigError>
where
    DB: KvPutter + ?Sized,
{
    let Some(config) = config else {
        return Err(ChainConfigError::InvalidArgument("missing chain config"));
    };

    let data = serde_json::to_vec(config).map_err(|source| {
        error!(target: "rawdb", %hash, err = %source, "Failed to JSON encode chain config");
        ChainConfigError::EncodeFailure { hash, source }
    })?;

    db.put(Table::ChainConfig, &config_key(hash), &data).map_err(|source| {
        error!(target: "rawdb", %hash, err = %source, "Failed to store chain config");
        ChainConfigError::WriteFailure { hash, source }
    })?;

    debug!(target: "rawdb", %hash, chain_id = config.chain_id, len = data.len(), "Stored chain config");
    Ok(())
}
