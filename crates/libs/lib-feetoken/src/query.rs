//! # Isolated Queries
//!
//! Snapshot guard and the shared static-call path used by every read-only query.

use crate::error::QueryError;
use crate::state::{ExecutionContext, SnapshotId};
use alloy_primitives::{Address, Bytes};
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// A state checkpoint that is always rolled back.
///
/// Taking the guard records a snapshot; dropping it reverts to that snapshot, on success,
/// on `?` early return and during unwinding alike. The guard derefs to the context so the
/// query runs through it.
pub struct QuerySnapshot<'a, C: ExecutionContext + ?Sized> {
    ctx: &'a mut C,
    id: SnapshotId,
}

impl<'a, C: ExecutionContext + ?Sized> QuerySnapshot<'a, C> {
    pub fn take(ctx: &'a mut C) -> Self {
        let id = ctx.snapshot();
        trace!("Query snapshot {} taken", id);
        Self { ctx, id }
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }
}

impl<C: ExecutionContext + ?Sized> Deref for QuerySnapshot<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: ExecutionContext + ?Sized> DerefMut for QuerySnapshot<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: ExecutionContext + ?Sized> Drop for QuerySnapshot<'_, C> {
    fn drop(&mut self) {
        self.ctx.revert_to_snapshot(self.id);
        trace!("Query snapshot {} reverted", self.id);
    }
}

/// Static-call `target` inside a throwaway snapshot and return the raw output.
pub(crate) fn static_query<C: ExecutionContext + ?Sized>(
    ctx: &mut C,
    caller: Address,
    target: Address,
    input: Bytes,
    gas_limit: u64,
) -> Result<Bytes, QueryError> {
    let mut snapshot = QuerySnapshot::take(ctx);

    match snapshot.static_call(caller, target, input, gas_limit) {
        Ok(outcome) => {
            debug!(
                "Static call {} -> {} used {} of {} gas",
                caller, target, outcome.gas_used, gas_limit
            );
            Ok(outcome.output)
        }
        Err(source) => {
            debug!("Static call {} -> {} failed: {}", caller, target, source);
            Err(QueryError::CallFailed { target, source })
        }
    }
}
