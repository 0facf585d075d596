//! Chain configuration accessor errors.

use crate::storage::StoreError;
use alloy_primitives::B256;
use thiserror::Error;

/// Errors returned by the chain configuration accessors.
#[derive(Debug, Error)]
pub enum ChainConfigError {
    /// No configuration stored for the genesis hash.
    ///
    /// Recoverable: the genesis has not been imported yet.
    #[error("chain config not found for genesis {hash}")]
    NotFound { hash: B256 },

    /// The store failed the lookup.
    #[error("failed to fetch chain config for genesis {hash}")]
    ReadFailure {
        hash: B256,
        #[source]
        source: StoreError,
    },

    /// Stored bytes are not a valid chain config.
    #[error("invalid chain config JSON for genesis {hash}")]
    DecodeFailure {
        hash: B256,
        #[source]
        source: serde_json::Error,
    },

    /// The caller passed an absent or unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The chain config could not be JSON encoded.
    #[error("failed to encode chain config for genesis {hash}")]
    EncodeFailure {
        hash: B256,
        #[source]
        source: serde_json::Error,
    },

    /// The store failed the upsert.
    #[error("failed to store chain config for genesis {hash}")]
    WriteFailure {
        hash: B256,
        #[source]
        source: StoreError,
    },
}

/// Fieldless discriminant of [`ChainConfigError`], for matching without
/// borrowing the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainConfigErrorKind {
    NotFound,
    ReadFailure,
    DecodeFailure,
    InvalidArgument,
    EncodeFailure,
    WriteFailure,
}

impl ChainConfigError {
    /// The kind of failure.
    pub fn kind(&self) -> ChainConfigErrorKind {
        match self {
            Self::NotFound { .. } => ChainConfigErrorKind::NotFound,
            Self::ReadFailure { .. } => ChainConfigErrorKind::ReadFailure,
            Self::DecodeFailure { .. } => ChainConfigErrorKind::DecodeFailure,
            Self::InvalidArgument(_) => ChainConfigErrorKind::InvalidArgument,
            Self::EncodeFailure { .. } => ChainConfigErrorKind::EncodeFailure,
            Self::WriteFailure { .. } => ChainConfigErrorKind::WriteFailure,
        }
    }

    /// Returns `true` if no config has been written for the genesis yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
