//! # Binding Registry
//!
//! Reads which fee token an account has bound. The binder contract keeps one raw storage
//! word per account: the key is the account address zero-extended to 32 bytes, the value
//! is the token address in the low-order 20 bytes. An all-zero word means "not bound".

use crate::constants::BINDER_ADDRESS;
use crate::state::StateReader;
use alloy_primitives::{Address, B256};

/// Storage key of `account`'s binding: the address in the low-order 20 bytes.
pub fn binding_key(account: Address) -> B256 {
    account.into_word()
}

/// Resolve `account`'s fee token.
///
/// Returns the token and whether it is bound; the flag is true exactly when the token is
/// non-zero. An account that never bound anything reads as `(Address::ZERO, false)`.
pub fn resolve_binding<S: StateReader + ?Sized>(state: &S, account: Address) -> (Address, bool) {
    let word = state.read_slot(BINDER_ADDRESS, binding_key(account));
    let token = Address::from_word(word);
    (token, !token.is_zero())
}

/// [`resolve_binding`] as an `Option`.
pub fn bound_token<S: StateReader + ?Sized>(state: &S, account: Address) -> Option<Address> {
    match resolve_binding(state, account) {
        (token, true) => Some(token),
        (_, false) => None,
    }
}
