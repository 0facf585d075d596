//! Chain configuration record.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Consensus engine driving the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusType {
    /// Clique proof-of-authority.
    #[default]
    Clique,
    /// APoS proof-of-stake.
    Apos,
    /// Ethash proof-of-work.
    Ethash,
}

/// Clique proof-of-authority parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueParams {
    /// Number of seconds between blocks to enforce.
    pub period: u64,
    /// Epoch length to reset votes and checkpoint.
    pub epoch: u64,
}

/// APoS proof-of-stake parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AposParams {
    /// Number of seconds between blocks to enforce.
    pub period: u64,
    /// Epoch length to reset votes and checkpoint.
    pub epoch: u64,
    /// Number of blocks between reward payouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_epoch: Option<u64>,
    /// Maximum reward paid out per epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_limit: Option<U256>,
}

/// Core consensus settings of a chain, stored in the database keyed by the
/// genesis hash.
///
/// Fork activation fields are `None` when the fork is not scheduled and
/// `Some(0)` when active from genesis. Field names follow the go-ethereum
/// JSON layout so configs can be exchanged with other tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Human readable chain name.
    #[serde(default)]
    pub chain_name: String,
    /// EIP-155 chain identifier.
    pub chain_id: u64,
    /// Consensus engine.
    #[serde(default)]
    pub consensus: ConsensusType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip158_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berlin_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub london_block: Option<u64>,

    /// Shanghai switch time (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shanghai_time: Option<u64>,
    /// Cancun switch time (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancun_time: Option<u64>,

    /// Total difficulty at which the network transitions to proof-of-stake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_total_difficulty: Option<U256>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clique: Option<CliqueParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apos: Option<AposParams>,
}

/// `true` if a fork scheduled at `fork` is active at `head`.
fn is_block_forked(fork: Option<u64>, head: u64) -> bool {
    fork.is_some_and(|f| f <= head)
}

impl ChainConfig {
    /// Create a configuration with the given chain id and no forks scheduled.
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id, ..Default::default() }
    }

    /// Set the chain name.
    pub fn with_chain_name(mut self, name: impl Into<String>) -> Self {
        self.chain_name = name.into();
        self
    }

    /// Use Clique consensus with the given parameters.
    pub fn with_clique(mut self, period: u64, epoch: u64) -> Self {
        self.consensus = ConsensusType::Clique;
        self.clique = Some(CliqueParams { period, epoch });
        self
    }

    /// Use APoS consensus with the given parameters.
    pub fn with_apos(mut self, apos: AposParams) -> Self {
        self.consensus = ConsensusType::Apos;
        self.apos = Some(apos);
        self
    }

    /// Activate every block-number fork up to and including London at `block`.
    pub fn with_all_block_forks_at(mut self, block: u64) -> Self {
        for fork in [
            &mut self.homestead_block,
            &mut self.eip150_block,
            &mut self.eip155_block,
            &mut self.eip158_block,
            &mut self.byzantium_block,
            &mut self.constantinople_block,
            &mut self.petersburg_block,
            &mut self.istanbul_block,
            &mut self.berlin_block,
            &mut self.london_block,
        ] {
            *fork = Some(block);
        }
        self
    }

    pub fn is_homestead(&self, num: u64) -> bool {
        is_block_forked(self.homestead_block, num)
    }

    pub fn is_eip150(&self, num: u64) -> bool {
        is_block_forked(self.eip150_block, num)
    }

    pub fn is_eip155(&self, num: u64) -> bool {
        is_block_forked(self.eip155_block, num)
    }

    pub fn is_eip158(&self, num: u64) -> bool {
        is_block_forked(self.eip158_block, num)
    }

    pub fn is_byzantium(&self, num: u64) -> bool {
        is_block_forked(self.byzantium_block, num)
    }

    pub fn is_constantinople(&self, num: u64) -> bool {
        is_block_forked(self.constantinople_block, num)
    }

    pub fn is_petersburg(&self, num: u64) -> bool {
        // Petersburg is either explicitly scheduled, or enabled together with
        // Constantinople when left unset.
        is_block_forked(self.petersburg_block, num)
            || (self.petersburg_block.is_none() && self.is_constantinople(num))
    }

    pub fn is_istanbul(&self, num: u64) -> bool {
        is_block_forked(self.istanbul_block, num)
    }

    pub fn is_berlin(&self, num: u64) -> bool {
        is_block_forked(self.berlin_block, num)
    }

    pub fn is_london(&self, num: u64) -> bool {
        is_block_forked(self.london_block, num)
    }

    /// Whether Shanghai is active at the given timestamp.
    pub fn is_shanghai(&self, time: u64) -> bool {
        is_block_forked(self.shanghai_time, time)
    }

    /// Whether Cancun is active at the given timestamp.
    pub fn is_cancun(&self, time: u64) -> bool {
        is_block_forked(self.cancun_time, time)
    }
}

impl std::fmt::Display for ChainConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ChainName: {} ChainID: {} Engine: {:?} Homestead: {:?} EIP150: {:?} EIP155: {:?} \
             EIP158: {:?} Byzantium: {:?} Constantinople: {:?} Petersburg: {:?} Istanbul: {:?} \
             Berlin: {:?} London: {:?}}}",
            self.chain_name,
            self.chain_id,
            self.consensus,
            self.homestead_block,
            self.eip150_block,
            self.eip155_block,
            self.eip158_block,
            self.byzantium_block,
            self.constantinople_block,
            self.petersburg_block,
            self.istanbul_block,
            self.berlin_block,
            self.london_block,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let config = ChainConfig::new(42).with_chain_name("n42").with_clique(8, 30000);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["chainName"], "n42");
        assert_eq!(json["chainId"], 42);
        assert_eq!(json["consensus"], "clique");
        assert_eq!(json["clique"]["period"], 8);
        assert_eq!(json["clique"]["epoch"], 30000);
        // Unscheduled forks are omitted
        assert!(json.get("londonBlock").is_none());
    }

    #[test]
    fn test_decode_geth_style_json() {
        let json = r#"{
            "chainId": 1337,
            "homesteadBlock": 0,
            "eip150Block": 0,
            "eip155Block": 0,
            "eip158Block": 0,
            "byzantiumBlock": 0,
            "constantinopleBlock": 0,
            "petersburgBlock": 0,
            "istanbulBlock": 0,
            "berlinBlock": 0,
            "londonBlock": 100,
            "shanghaiTime": 1700000000,
            "terminalTotalDifficulty": "0x0",
            "someFutureField": true
        }"#;

        let config: ChainConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chain_id, 1337);
        assert_eq!(config.consensus, ConsensusType::Clique);
        assert!(config.is_berlin(0));
        assert!(!config.is_london(99));
        assert!(config.is_london(100));
        assert!(config.is_shanghai(1_700_000_000));
        assert!(!config.is_cancun(u64::MAX));
        assert_eq!(config.terminal_total_difficulty, Some(U256::ZERO));
    }

    #[test]
    fn test_json_stable_across_reencode() {
        let config = ChainConfig::new(7)
            .with_chain_name("testnet")
            .with_all_block_forks_at(0)
            .with_apos(AposParams {
                period: 8,
                epoch: 30000,
                reward_epoch: Some(5760),
                reward_limit: Some(U256::from(1_000_000_000u64)),
            });

        let encoded = serde_json::to_vec(&config).unwrap();
        let decoded: ChainConfig = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, config);
        assert_eq!(serde_json::to_vec(&decoded).unwrap(), encoded);
    }

    #[test]
    fn test_petersburg_follows_constantinople() {
        let mut config = ChainConfig::new(1);
        config.constantinople_block = Some(10);

        assert!(!config.is_petersburg(9));
        assert!(config.is_petersburg(10));

        config.petersburg_block = Some(20);
        assert!(!config.is_petersburg(10));
        assert!(config.is_petersburg(20));
    }

    #[test]
    fn test_missing_chain_id_rejected() {
        let result: Result<ChainConfig, _> = serde_json::from_str(r#"{"chainName":"x"}"#);
        assert!(result.is_err());
    }
}
