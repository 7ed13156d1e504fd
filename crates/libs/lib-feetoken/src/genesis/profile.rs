//! # Genesis Profiles
//!
//! Named parameter sets for the development chains. Both share one assembly path in
//! [`build_genesis`](super::build_genesis); only the values here differ.

use super::chain_config::CliqueConfig;
use alloy_primitives::{address, Address, Bytes, U256};
use lib_core::AppError;
use std::fmt;
use std::str::FromStr;

const CLIQUE_VANITY_LEN: usize = 32;
const CLIQUE_SEAL_LEN: usize = 65;
const CLIQUE_EPOCH: u64 = 30_000;

const PRIMARY_FAUCET: Address = address!("0xf1658c608708172655a8e70a1624c29f956ee63d");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenesisProfile {
    /// Chain 1130, 3 second blocks, three faucets.
    SwapDev,
    /// Chain 14298360, 5 second blocks, one faucet.
    LegacyDev,
}

/// The values a profile contributes to the genesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileParams {
    pub chain_id: u64,
    pub clique: CliqueConfig,
    pub faucets: Vec<Address>,
    pub faucet_balance: U256,
    /// Initial Clique signer, embedded in the extra data.
    pub signer: Address,
}

impl GenesisProfile {
    pub const ALL: [GenesisProfile; 2] = [GenesisProfile::SwapDev, GenesisProfile::LegacyDev];

    pub fn name(&self) -> &'static str {
        match self {
            GenesisProfile::SwapDev => "swap-dev",
            GenesisProfile::LegacyDev => "legacy-dev",
        }
    }

    pub fn params(&self) -> ProfileParams {
        match self {
            GenesisProfile::SwapDev => ProfileParams {
                chain_id: 1130,
                clique: CliqueConfig { period: 3, epoch: CLIQUE_EPOCH },
                faucets: vec![
                    PRIMARY_FAUCET,
                    address!("0x99F5a620384A5a530320Fc0Be2af3b69D763ED4f"),
                    address!("0xD83c37edF25DCE7FD965a8E7aA0f22F5bbfa91Ca"),
                ],
                // 10^9 native units
                faucet_balance: U256::from(1_000_000_000_000_000_000_000_000_000u128),
                signer: address!("0xAcD534B544e5E83E09E1394CecFBfAF6Fca61E0A"),
            },
            GenesisProfile::LegacyDev => ProfileParams {
                chain_id: 14_298_360,
                clique: CliqueConfig { period: 5, epoch: CLIQUE_EPOCH },
                faucets: vec![PRIMARY_FAUCET],
                // 10^5 native units
                faucet_balance: U256::from(100_000_000_000_000_000_000_000u128),
                signer: address!("0xeb684771f530003b5ea27dcd727d75fcb7665822"),
            },
        }
    }
}

impl fmt::Display for GenesisProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenesisProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenesisProfile::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "unknown genesis profile '{}' (expected swap-dev or legacy-dev)",
                    s
                ))
            })
    }
}

/// Clique extra data: 32 vanity bytes, the signer addresses, 65 seal bytes, all zero
/// except the signers.
pub fn clique_extra_data(signers: &[Address]) -> Bytes {
    let mut extra = Vec::with_capacity(CLIQUE_VANITY_LEN + signers.len() * 20 + CLIQUE_SEAL_LEN);
    extra.extend_from_slice(&[0u8; CLIQUE_VANITY_LEN]);
    for signer in signers {
        extra.extend_from_slice(signer.as_slice());
    }
    extra.extend_from_slice(&[0u8; CLIQUE_SEAL_LEN]);
    extra.into()
}
