//! Database key schema.

use alloy_primitives::B256;

/// Database key prefix for chain configurations.
pub const CONFIG_PREFIX: &[u8] = b"ethereum-config-";

/// Length of a chain configuration key.
pub const CONFIG_KEY_LEN: usize = CONFIG_PREFIX.len() + 32;

/// Key of the chain configuration for the chain with the given genesis hash:
/// `CONFIG_PREFIX || hash`.
pub fn config_key(hash: B256) -> [u8; CONFIG_KEY_LEN] {
    let mut key = [0u8; CONFIG_KEY_LEN];
    key[..CONFIG_PREFIX.len()].copy_from_slice(CONFIG_PREFIX);
    key[CONFIG_PREFIX.len()..].copy_from_slice(hash.as_slice());
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_layout() {
        let hash = B256::repeat_byte(0xab);
        let key = config_key(hash);

        assert_eq!(key.len(), 48);
        assert!(key.starts_with(b"ethereum-config-"));
        assert_eq!(&key[CONFIG_PREFIX.len()..], hash.as_slice());
    }

    #[test]
    fn test_config_key_distinct_hashes() {
        let mut last = B256::ZERO;
        last.0[31] = 1;

        assert_ne!(config_key(B256::ZERO), config_key(last));
        assert_ne!(
            config_key(B256::repeat_byte(0x01)),
            config_key(B256::repeat_byte(0x02))
        );
    }
}
