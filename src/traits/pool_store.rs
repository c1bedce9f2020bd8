//! Storage seam for pool state.
//!
//! The service never owns ambient global state: it is handed a
//! [`PoolStore`] and reads and writes whole [`Pool`] entries through it.
//! An operation stages its changes on a copy of the entry and writes the
//! copy back with [`PoolStore::put`] only once the staged state satisfies
//! every ledger invariant; restoring the original copy is how a failed
//! operation rolls back.

use crate::domain::{AssetPair, PoolKey};
use crate::ledger::Pool;

/// Mapping from [`PoolKey`] to [`Pool`].
pub trait PoolStore {
    /// Returns the pool stored under `key`, if any.
    fn get(&self, key: &PoolKey) -> Option<&Pool>;

    /// Returns the pool for `pair`, creating an empty uninitialized entry
    /// if none exists.
    fn get_or_create(&mut self, pair: AssetPair) -> &mut Pool;

    /// Replaces the entry for `pool`'s key wholesale.
    fn put(&mut self, pool: Pool);
}
