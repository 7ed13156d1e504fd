//! # Amount-In Estimator
//!
//! Asks the router how much of the bound token buys an exact amount of native currency.
//! The pricing formula belongs to the router contract; this module only calls and decodes.

use crate::abi::{swap_path, IUniswapV2Router02};
use crate::constants::{MAX_GET_AMOUNTS_IN_GAS, ROUTER_ADDRESS};
use crate::error::QueryError;
use crate::query::static_query;
use crate::state::ExecutionContext;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

/// Amount of `token` required to receive `desired_native_out` wrapped native.
///
/// Calls `getAmountsIn(desired_native_out, [token, WrappedNative])` on the router with
/// `holder` as caller, bounded by [`MAX_GET_AMOUNTS_IN_GAS`], under a reverted snapshot,
/// and returns the first element of the result (the input leg of the path).
///
/// # Errors
///
/// - [`QueryError::CallFailed`] if the router call fails (e.g. no pair, insufficient
///   liquidity, out of gas).
/// - [`QueryError::DecodeFailed`] if the result is not a `uint256[]` or is empty.
pub fn query_amount_in<C: ExecutionContext + ?Sized>(
    ctx: &mut C,
    token: Address,
    holder: Address,
    desired_native_out: U256,
) -> Result<U256, QueryError> {
    let input = IUniswapV2Router02::getAmountsInCall {
        amountOut: desired_native_out,
        path: swap_path(token),
    }
    .abi_encode();
    let output = static_query(ctx, holder, ROUTER_ADDRESS, input.into(), MAX_GET_AMOUNTS_IN_GAS)?;

    let amounts = IUniswapV2Router02::getAmountsInCall::abi_decode_returns(&output)
        .map_err(|e| decode_failed(e.to_string()))?;

    amounts
        .first()
        .copied()
        .ok_or_else(|| decode_failed("empty amounts".to_string()))
}

fn decode_failed(reason: String) -> QueryError {
    QueryError::DecodeFailed {
        function: IUniswapV2Router02::getAmountsInCall::SIGNATURE,
        reason,
    }
}
