//! # Fee Resolution Errors
//!
//! Runtime failures of the fee-token queries and of the settlement planner. None of these
//! leave state behind: every query runs under a snapshot that is reverted.

use crate::state::CallError;
use alloy_primitives::{Address, U256};
use thiserror::Error;

/// A read-only contract query failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The static call itself failed (revert, out of gas, halt).
    #[error("static call to {target} failed: {source}")]
    CallFailed {
        target: Address,
        source: CallError,
    },

    /// The call returned data that is not the expected ABI shape.
    #[error("cannot decode {function} result: {reason}")]
    DecodeFailed {
        function: &'static str,
        reason: String,
    },
}

/// Paying a fee in the bound token is not possible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("insufficient {token} balance: need {required}, have {available}")]
    InsufficientTokenBalance {
        token: Address,
        required: U256,
        available: U256,
    },
}
