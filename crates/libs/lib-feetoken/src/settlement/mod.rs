//! # Fee Settlement Planner
//!
//! Ties the pieces together for one transaction: look up the sender's fee token, check it
//! can cover the fee at the router's current price, and prepare the swap that will pay it.
//!
//! ```text
//! account ──► resolve_binding ──unbound──► FeePayment::Native
//!                  │ bound
//!                  ▼
//!            query_balance ──► query_amount_in ──short──► InsufficientTokenBalance
//!                                     │ enough
//!                                     ▼
//!                           build_swap_calldata ──► FeePayment::Token
//! ```
//!
//! Nothing here writes state. Whether a failure rejects the transaction or falls back to
//! native payment is the host's decision.

use crate::amounts::query_amount_in;
use crate::balance::query_balance;
use crate::binder::resolve_binding;
use crate::constants::ROUTER_ADDRESS;
use crate::error::SettlementError;
use crate::state::{ExecutionContext, StateReader};
use crate::swap::build_swap_calldata;
use alloy_primitives::{Address, Bytes, U256};
use tracing::{debug, info, warn};


/// How the fee of a transaction is paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeePayment {
    /// The sender pays in native currency.
    Native,
    /// The sender pays by swapping its bound token through the router.
    Token(TokenFeePayment),
}

/// A prepared token-to-native fee swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFeePayment {
    pub token: Address,
    /// Contract the calldata is addressed to.
    pub router: Address,
    /// Token amount the router quoted for the fee; also the swap's `amountInMax`.
    pub required: U256,
    /// Sender's token balance at planning time.
    pub available: U256,
    /// `swapTokensForExactETH` calldata.
    pub calldata: Bytes,
}

impl FeePayment {
    pub fn is_token(&self) -> bool {
        matches!(self, FeePayment::Token(_))
    }

    pub fn calldata(&self) -> Option<&Bytes> {
        match self {
            FeePayment::Token(payment) => Some(&payment.calldata),
            FeePayment::Native => None,
        }
    }
}

/// Decide how `account` pays `native_fee`.
///
/// # Errors
///
/// - [`SettlementError::Query`] if the balance or price query fails.
/// - [`SettlementError::InsufficientTokenBalance`] if the bound token cannot cover the fee.
pub fn plan_fee_payment<C>(
    ctx: &mut C,
    account: Address,
    native_fee: U256,
    deadline: U256,
) -> Result<FeePayment, SettlementError>
where
    C: StateReader + ExecutionContext + ?Sized,
{
    let (token, bound) = resolve_binding(&*ctx, account);
    if !bound {
        debug!("{} has no fee token, paying natively", account);
        return Ok(FeePayment::Native);
    }
    if native_fee.is_zero() {
        debug!("Zero fee for {}, nothing to convert", account);
        return Ok(FeePayment::Native);
    }

    let available = query_balance(ctx, token, account).inspect_err(|e| {
        warn!("Balance query for {} in {} failed: {}", account, token, e);
    })?;
    let required = query_amount_in(ctx, token, account, native_fee).inspect_err(|e| {
        warn!("Price query for {} -> native failed: {}", token, e);
    })?;

    if available < required {
        warn!(
            "{} cannot cover fee {} with {}: need {}, have {}",
            account, native_fee, token, required, available
        );
        return Err(SettlementError::InsufficientTokenBalance {
            token,
            required,
            available,
        });
    }

    let calldata = build_swap_calldata(native_fee, required, token, account, deadline);
    info!(
        "Fee of {} for {} will be paid with {} {}",
        native_fee, account, required, token
    );

    Ok(FeePayment::Token(TokenFeePayment {
        token,
        router: ROUTER_ADDRESS,
        required,
        available,
        calldata,
    }))
}
