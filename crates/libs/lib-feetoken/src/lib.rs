//! # Fee Token Library
//!
//! Lets an account pay transaction fees in an ERC20 token it has bound, converted to the
//! native currency through an on-chain Uniswap V2 style router.
//!
//! ```text
//! ┌──────────┐  read_slot   ┌─────────┐
//! │  binder  │─────────────►│ Binder  │  account -> token
//! └────┬─────┘              └─────────┘
//!      │ token
//!      ▼
//! ┌──────────┐ static_call  ┌─────────┐
//! │ balance  │─────────────►│ ERC20   │  balanceOf
//! │ amounts  │─────────────►│ Router  │  getAmountsIn
//! └────┬─────┘              └─────────┘
//!      ▼
//! ┌──────────┐
//! │   swap   │  swapTokensForExactETH calldata
//! └──────────┘
//! ```
//!
//! The host provides state access through [`StateReader`] and [`ExecutionContext`]. The
//! [`genesis`] module builds the development chain that deploys these contracts.

// Declare all modules
pub mod abi;
pub mod amounts;
pub mod balance;
pub mod binder;
pub mod constants;
pub mod error;
pub mod genesis;
pub mod query;
pub mod settlement;
pub mod state;
pub mod swap;

#[cfg(test)]
mod testing;

// Re-export commonly used types from root for convenience
pub use amounts::query_amount_in;
pub use balance::query_balance;
pub use binder::{binding_key, bound_token, resolve_binding};
pub use error::{QueryError, SettlementError};
pub use genesis::{build_genesis, ContractArtifacts, Genesis, GenesisProfile};
pub use query::QuerySnapshot;
pub use settlement::{plan_fee_payment, FeePayment, TokenFeePayment};
pub use state::{CallError, CallOutcome, ExecutionContext, SnapshotId, StateReader};
pub use swap::build_swap_calldata;
