//! # Genesis Bootstrapper
//!
//! Assembles the genesis block for a development chain: the fork schedule, Clique
//! parameters, pre-funded faucets and the four well-known contracts with their bytecode.
//! The router's constructor never runs on a genesis-allocated contract, so its immutable
//! addresses are written straight into storage slots 0 and 1.
//!
//! Output is the JSON that `geth init` reads.
//!
//! ## Example
//!
//! ```rust,ignore
//! let artifacts = ContractArtifacts::load_dir(Path::new("contracts"))?;
//! let genesis = build_genesis(GenesisProfile::SwapDev, &artifacts).with_timestamp(0);
//! genesis.verify_router_layout()?;
//! std::fs::write("genesis.json", genesis.to_json_pretty()?)?;
//! ```

pub mod artifacts;
pub mod chain_config;
pub mod profile;

pub use artifacts::ContractArtifacts;
pub use chain_config::{ChainConfig, CliqueConfig};
pub use profile::{clique_extra_data, GenesisProfile, ProfileParams};

use crate::constants::{
    BINDER_ADDRESS, FACTORY_ADDRESS, ROUTER_ADDRESS, ROUTER_FACTORY_SLOT,
    ROUTER_WRAPPED_NATIVE_SLOT, WRAPPED_NATIVE_ADDRESS,
};
use alloy_primitives::{Address, Bytes, B256, U256};
use lib_core::{AppError, Result};
use lib_utils::hex::quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Block gas limit shared by every profile.
pub const GENESIS_GAS_LIMIT: u64 = 10_485_760;

/// London base fee of the genesis block (1 gwei).
pub const INITIAL_BASE_FEE: u64 = 1_000_000_000;

/// One allocated account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub balance: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<B256, B256>>,
}

impl GenesisAccount {
    fn funded(balance: U256) -> Self {
        Self { balance, ..Default::default() }
    }

    fn contract(code: Bytes) -> Self {
        Self { code: Some(code), ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub config: ChainConfig,
    #[serde(with = "quantity")]
    pub nonce: u64,
    #[serde(with = "quantity")]
    pub timestamp: u64,
    pub extra_data: Bytes,
    #[serde(with = "quantity")]
    pub gas_limit: u64,
    pub difficulty: U256,
    pub mix_hash: B256,
    pub coinbase: Address,
    pub alloc: BTreeMap<Address, GenesisAccount>,
    #[serde(with = "quantity")]
    pub number: u64,
    #[serde(with = "quantity")]
    pub gas_used: u64,
    pub parent_hash: B256,
    pub base_fee_per_gas: U256,
}

/// Build the genesis for `profile`.
///
/// Deterministic: the same profile and artifacts always give the same value. The
/// timestamp starts at zero; see [`Genesis::with_timestamp`].
pub fn build_genesis(profile: GenesisProfile, artifacts: &ContractArtifacts) -> Genesis {
    let params = profile.params();

    let mut alloc = BTreeMap::new();
    for faucet in &params.faucets {
        alloc.insert(*faucet, GenesisAccount::funded(params.faucet_balance));
    }

    alloc.insert(FACTORY_ADDRESS, GenesisAccount::contract(artifacts.factory.clone()));
    alloc.insert(
        WRAPPED_NATIVE_ADDRESS,
        GenesisAccount::contract(artifacts.wrapped_native.clone()),
    );
    alloc.insert(BINDER_ADDRESS, GenesisAccount::contract(artifacts.binder.clone()));

    let mut router = GenesisAccount::contract(artifacts.router.clone());
    router.storage = Some(BTreeMap::from([
        (ROUTER_FACTORY_SLOT, FACTORY_ADDRESS.into_word()),
        (ROUTER_WRAPPED_NATIVE_SLOT, WRAPPED_NATIVE_ADDRESS.into_word()),
    ]));
    alloc.insert(ROUTER_ADDRESS, router);

    info!(
        "Built {} genesis: chain id {}, {} faucet(s), {} allocated accounts",
        profile,
        params.chain_id,
        params.faucets.len(),
        alloc.len()
    );

    Genesis {
        config: ChainConfig::london_from_genesis(params.chain_id, params.clique),
        nonce: 0,
        timestamp: 0,
        extra_data: clique_extra_data(&[params.signer]),
        gas_limit: GENESIS_GAS_LIMIT,
        difficulty: U256::ZERO,
        mix_hash: B256::ZERO,
        coinbase: Address::ZERO,
        alloc,
        number: 0,
        gas_used: 0,
        parent_hash: B256::ZERO,
        base_fee_per_gas: U256::from(INITIAL_BASE_FEE),
    }
}

impl Genesis {
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Factory and wrapped native addresses as stored in the router's slots 0 and 1.
    pub fn router_slots(&self) -> Option<(Address, Address)> {
        let storage = self.alloc.get(&ROUTER_ADDRESS)?.storage.as_ref()?;
        let factory = storage.get(&ROUTER_FACTORY_SLOT)?;
        let wrapped_native = storage.get(&ROUTER_WRAPPED_NATIVE_SLOT)?;
        Some((Address::from_word(*factory), Address::from_word(*wrapped_native)))
    }

    /// Check that the router's slots point at the well-known factory and wrapped native.
    pub fn verify_router_layout(&self) -> Result<()> {
        match self.router_slots() {
            Some((factory, wrapped_native))
                if factory == FACTORY_ADDRESS && wrapped_native == WRAPPED_NATIVE_ADDRESS =>
            {
                Ok(())
            }
            Some((factory, wrapped_native)) => Err(AppError::Internal(format!(
                "router slots point at factory {} and wrapped native {}",
                factory, wrapped_native
            ))),
            None => Err(AppError::Internal("router storage is not populated".to_string())),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artifacts() -> ContractArtifacts {
        ContractArtifacts::from_hex("0x6001", "0x6002", "0x6003").unwrap()
    }

    #[test]
    fn test_router_slots_hold_factory_and_wrapped_native() {
        for profile in GenesisProfile::ALL {
            let genesis = build_genesis(profile, &sample_artifacts());
            assert_eq!(
                genesis.router_slots(),
                Some((FACTORY_ADDRESS, WRAPPED_NATIVE_ADDRESS)),
                "{profile}"
            );
            assert!(genesis.verify_router_layout().is_ok());
        }
    }

    #[test]
    fn test_corrupted_router_layout_is_detected() {
        let mut genesis = build_genesis(GenesisProfile::SwapDev, &sample_artifacts());
        genesis
            .alloc
            .get_mut(&ROUTER_ADDRESS)
            .and_then(|a| a.storage.as_mut())
            .unwrap()
            .insert(ROUTER_WRAPPED_NATIVE_SLOT, FACTORY_ADDRESS.into_word());
        assert!(genesis.verify_router_layout().is_err());

        genesis.alloc.remove(&ROUTER_ADDRESS);
        assert!(genesis.verify_router_layout().is_err());
    }

    #[test]
    fn test_allocation_contents() {
        for profile in GenesisProfile::ALL {
            let params = profile.params();
            let genesis = build_genesis(profile, &sample_artifacts());

            assert_eq!(genesis.alloc.len(), params.faucets.len() + 4);
            for faucet in &params.faucets {
                assert_eq!(genesis.alloc[faucet].balance, params.faucet_balance);
                assert!(genesis.alloc[faucet].code.is_none());
            }
            for contract in [FACTORY_ADDRESS, WRAPPED_NATIVE_ADDRESS, ROUTER_ADDRESS, BINDER_ADDRESS] {
                assert_eq!(genesis.alloc[&contract].balance, U256::ZERO);
                assert!(genesis.alloc[&contract].code.is_some());
            }
            assert_eq!(genesis.alloc[&BINDER_ADDRESS].code, Some(artifacts::builtin_binder_code()));
            assert_eq!(genesis.extra_data.len(), 117);
            assert_eq!(genesis.config.chain_id, params.chain_id);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_genesis(GenesisProfile::LegacyDev, &sample_artifacts());
        let b = build_genesis(GenesisProfile::LegacyDev, &sample_artifacts());
        assert_eq!(a, b);
        assert_eq!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
    }

    #[test]
    fn test_json_matches_geth_layout() {
        let genesis = build_genesis(GenesisProfile::SwapDev, &sample_artifacts()).with_timestamp(1_700_000_000);
        let json: serde_json::Value = serde_json::from_str(&genesis.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["config"]["chainId"], 1130);
        assert_eq!(json["config"]["clique"]["period"], 3);
        assert_eq!(json["nonce"], "0x0");
        assert_eq!(json["timestamp"], "0x6553f100");
        assert_eq!(json["gasLimit"], "0xa00000");
        assert_eq!(json["difficulty"], "0x0");
        assert_eq!(json["baseFeePerGas"], "0x3b9aca00");

        let router = &json["alloc"]["0x0000000000000000000000000000000000001002"];
        assert_eq!(router["code"], "0x6003");
        assert_eq!(
            router["storage"]["0x0000000000000000000000000000000000000000000000000000000000000001"],
            "0x0000000000000000000000000000000000000000000000000000000000001001"
        );

        let back: Genesis = serde_json::from_value(json).unwrap();
        assert_eq!(back, genesis);
    }
}
