//! # Well-Known Contracts & Limits
//!
//! Fixed addresses of the AMM contracts and the binder, the router's storage layout and
//! the gas ceilings for fee-resolution queries.

use alloy_primitives::{address, b256, Address, B256};

/// Uniswap V2 style pair factory.
pub const FACTORY_ADDRESS: Address = address!("0x0000000000000000000000000000000000001000");

/// Wrapped native currency (WETH equivalent).
pub const WRAPPED_NATIVE_ADDRESS: Address = address!("0x0000000000000000000000000000000000001001");

/// Router used for pricing and fee swaps.
pub const ROUTER_ADDRESS: Address = address!("0x0000000000000000000000000000000000001002");

/// Registry mapping accounts to their fee token.
pub const BINDER_ADDRESS: Address = address!("0x0000000000000000000000000000000000001003");

/// Router storage slot holding the factory address.
pub const ROUTER_FACTORY_SLOT: B256 =
    b256!("0x0000000000000000000000000000000000000000000000000000000000000000");

/// Router storage slot holding the wrapped native address.
pub const ROUTER_WRAPPED_NATIVE_SLOT: B256 =
    b256!("0x0000000000000000000000000000000000000000000000000000000000000001");

/// Gas ceiling for a `balanceOf` query.
pub const MAX_BALANCE_OF_GAS: u64 = 100_000;

/// Gas ceiling for a `getAmountsIn` query. Two reserve lookups plus the factory's pair
/// derivation fit comfortably.
pub const MAX_GET_AMOUNTS_IN_GAS: u64 = 200_000;
