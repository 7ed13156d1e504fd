//! # Host Capabilities
//!
//! The two narrow interfaces fee resolution needs from the host execution layer.
//!
//! - [`StateReader`] - raw storage reads, used by the binding registry.
//! - [`ExecutionContext`] - checkpoints plus read-only contract calls, used by the
//!   balance and amount-in queries.
//!
//! Nothing in this crate touches a concrete state database; the node implements these
//! traits over whatever journaled state it already keeps.

use alloy_primitives::{Address, Bytes, B256};
use thiserror::Error;

/// Read access to contract storage.
pub trait StateReader {
    /// Storage word at `key` in `address`'s storage. Unset slots read as zero.
    fn read_slot(&self, address: Address, key: B256) -> B256;
}

/// Identifier of a state checkpoint handed out by [`ExecutionContext::snapshot`].
pub type SnapshotId = usize;

/// Successful call result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// Raw return data.
    pub output: Bytes,
    /// Gas consumed by the call, never more than the limit it was given.
    pub gas_used: u64,
}

/// Why a contract call did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("execution reverted: {0:?}")]
    Reverted(Bytes),

    #[error("out of gas (limit {gas_limit})")]
    OutOfGas { gas_limit: u64 },

    #[error("execution halted: {0}")]
    Halted(String),
}

/// Checkpointed, read-only call access to the EVM.
///
/// Snapshots nest: reverting to an id discards every change made after it was taken,
/// including changes under later snapshots.
pub trait ExecutionContext {
    /// Take a checkpoint of the current state.
    fn snapshot(&mut self) -> SnapshotId;

    /// Roll state back to `id`.
    fn revert_to_snapshot(&mut self, id: SnapshotId);

    /// Run a static call from `caller` to `target`, bounded by `gas_limit`.
    ///
    /// The gas limit is independent of any enclosing transaction's budget. Calling an
    /// address without code succeeds with empty output, as in the EVM.
    fn static_call(
        &mut self,
        caller: Address,
        target: Address,
        input: Bytes,
        gas_limit: u64,
    ) -> Result<CallOutcome, CallError>;
}
