//! # Contract Interfaces
//!
//! Function descriptions for the token and router calls, fixed at compile time. The
//! router follows the Uniswap V2 `Router02` ABI.

use crate::constants::WRAPPED_NATIVE_ADDRESS;
use alloy_primitives::Address;
use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IUniswapV2Router02 {
        function getAmountsIn(uint256 amountOut, address[] calldata path) external view returns (uint256[] memory amounts);
        function swapTokensForExactETH(uint256 amountOut, uint256 amountInMax, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
    }
}

/// The only route fee conversion uses: bound token straight into wrapped native.
pub fn swap_path(token: Address) -> Vec<Address> {
    vec![token, WRAPPED_NATIVE_ADDRESS]
}
