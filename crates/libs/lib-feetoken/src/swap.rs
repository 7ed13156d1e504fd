//! # Swap Payload Builder
//!
//! Calldata for the router's `swapTokensForExactETH`, the call that converts the bound
//! token into the native fee. Submitting it (value, gas, caller) is up to the host.

use crate::abi::{swap_path, IUniswapV2Router02};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

/// Encode `swapTokensForExactETH(desired_native_out, max_token_in, [token, WrappedNative],
/// recipient, deadline)`.
pub fn build_swap_calldata(
    desired_native_out: U256,
    max_token_in: U256,
    token: Address,
    recipient: Address,
    deadline: U256,
) -> Bytes {
    IUniswapV2Router02::swapTokensForExactETHCall {
        amountOut: desired_native_out,
        amountInMax: max_token_in,
        path: swap_path(token),
        to: recipient,
        deadline,
    }
    .abi_encode()
    .into()
}
