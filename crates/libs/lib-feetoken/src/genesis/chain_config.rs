//! # Chain Configuration
//!
//! Fork schedule and Clique parameters in the shape geth reads from `genesis.json`.

use serde::{Deserialize, Serialize};

/// Clique proof-of-authority parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueConfig {
    /// Seconds between blocks.
    pub period: u64,
    /// Blocks between checkpoints that reset pending votes.
    pub epoch: u64,
}

/// Chain identifier and fork activation blocks.
///
/// Forks left as `None` are not scheduled and are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub chain_id: u64,
    pub homestead_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dao_fork_block: Option<u64>,
    pub dao_fork_support: bool,
    #[serde(rename = "eip150Block")]
    pub eip150_block: Option<u64>,
    #[serde(rename = "eip155Block")]
    pub eip155_block: Option<u64>,
    #[serde(rename = "eip158Block")]
    pub eip158_block: Option<u64>,
    pub byzantium_block: Option<u64>,
    pub constantinople_block: Option<u64>,
    pub petersburg_block: Option<u64>,
    pub istanbul_block: Option<u64>,
    pub muir_glacier_block: Option<u64>,
    pub berlin_block: Option<u64>,
    pub london_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_glacier_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gray_glacier_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_netsplit_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shanghai_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancun_block: Option<u64>,
    pub clique: CliqueConfig,
}

impl ChainConfig {
    /// Every fork from Homestead through London active at block 0; the DAO fork and
    /// everything after London unscheduled.
    pub fn london_from_genesis(chain_id: u64, clique: CliqueConfig) -> Self {
        Self {
            chain_id,
            homestead_block: Some(0),
            dao_fork_block: None,
            dao_fork_support: false,
            eip150_block: Some(0),
            eip155_block: Some(0),
            eip158_block: Some(0),
            byzantium_block: Some(0),
            constantinople_block: Some(0),
            petersburg_block: Some(0),
            istanbul_block: Some(0),
            muir_glacier_block: Some(0),
            berlin_block: Some(0),
            london_block: Some(0),
            arrow_glacier_block: None,
            gray_glacier_block: None,
            merge_netsplit_block: None,
            shanghai_block: None,
            cancun_block: None,
            clique,
        }
    }
}
