//! # Balance Oracle
//!
//! `balanceOf` on an arbitrary ERC20-style token, run as an isolated static call.

use crate::abi::IERC20;
use crate::constants::MAX_BALANCE_OF_GAS;
use crate::error::QueryError;
use crate::query::static_query;
use crate::state::ExecutionContext;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

/// Query `holder`'s balance of `token`.
///
/// The call runs with `holder` as caller, at most [`MAX_BALANCE_OF_GAS`] gas, under a
/// snapshot that is reverted afterwards. Whatever the token does during the call is
/// discarded.
///
/// # Errors
///
/// - [`QueryError::CallFailed`] if the token reverts, runs out of gas or halts.
/// - [`QueryError::DecodeFailed`] if the result is not a single `uint256`.
pub fn query_balance<C: ExecutionContext + ?Sized>(
    ctx: &mut C,
    token: Address,
    holder: Address,
) -> Result<U256, QueryError> {
    let input = IERC20::balanceOfCall { owner: holder }.abi_encode();
    let output = static_query(ctx, holder, token, input.into(), MAX_BALANCE_OF_GAS)?;

    IERC20::balanceOfCall::abi_decode_returns(&output).map_err(|e| QueryError::DecodeFailed {
        function: IERC20::balanceOfCall::SIGNATURE,
        reason: e.to_string(),
    })
}
