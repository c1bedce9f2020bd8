//! In-memory pool ledger.

use std::collections::HashMap;

use super::Pool;
use crate::domain::{Actor, AssetPair, PoolKey, Shares};
use crate::error::AmmError;
use crate::traits::PoolStore;

/// The default [`PoolStore`]: a `HashMap` from [`PoolKey`] to [`Pool`].
///
/// Entries are created on first reference and never deleted; a drained
/// pool stays in the map in its uninitialized state.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
/// use pairpool::ledger::PoolLedger;
/// use pairpool::traits::PoolStore;
///
/// let pair = AssetPair::new(AssetId::from_bytes([1; 20]), AssetId::from_bytes([2; 20]))
///     .expect("distinct assets");
/// let mut ledger = PoolLedger::new();
/// assert!(ledger.get(&pair.key()).is_none());
/// assert!(!ledger.get_or_create(pair).is_seeded());
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolLedger {
    pools: HashMap<PoolKey, Pool>,
}

impl PoolLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pool entries, seeded or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool has ever been referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Credits `amount` shares to `participant` in the pool under `key`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no entry exists for `key`.
    /// - [`AmmError::ArithmeticOverflow`] if a balance overflows.
    /// - [`AmmError::InvariantViolation`] if the pool holds no reserves to
    ///   back the new shares.
    pub fn credit_shares(
        &mut self,
        key: &PoolKey,
        participant: Actor,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.adjust(key, |pool| pool.credit_shares(participant, amount))
    }

    /// Debits `amount` shares from `participant` in the pool under `key`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no entry exists for `key`.
    /// - [`AmmError::InsufficientShares`] if the balance is too small.
    /// - [`AmmError::InvariantViolation`] if the debit would retire every
    ///   share while reserves remain.
    pub fn debit_shares(
        &mut self,
        key: &PoolKey,
        participant: Actor,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.adjust(key, |pool| pool.debit_shares(participant, amount))
    }

    /// Applies `change` to a copy of the entry and commits it only if the
    /// result passes [`Pool::check_invariants`].
    fn adjust(
        &mut self,
        key: &PoolKey,
        change: impl FnOnce(&mut Pool) -> Result<(), AmmError>,
    ) -> Result<(), AmmError> {
        let entry = self.pools.get_mut(key).ok_or(AmmError::PoolNotFound)?;
        let mut staged = entry.clone();
        change(&mut staged)?;
        staged.check_invariants()?;
        *entry = staged;
        Ok(())
    }
}

impl PoolStore for PoolLedger {
    fn get(&self, key: &PoolKey) -> Option<&Pool> {
        self.pools.get(key)
    }

    fn get_or_create(&mut self, pair: AssetPair) -> &mut Pool {
        self.pools
            .entry(pair.key())
            .or_insert_with(|| Pool::new(pair))
    }

    fn put(&mut self, pool: Pool) {
        self.pools.insert(pool.key(), pool);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Amount, AssetId};

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(AssetId::from_bytes([1; 20]), AssetId::from_bytes([2; 20]))
        else {
            panic!("expected Ok");
        };
        p
    }

    fn alice() -> Actor {
        Actor::from_bytes([0xA1; 20])
    }

    fn bob() -> Actor {
        Actor::from_bytes([0xB0; 20])
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut ledger = PoolLedger::new();
        let key = ledger.get_or_create(pair()).key();
        let again = ledger.get_or_create(pair()).key();
        assert_eq!(key, again);
        assert_eq!(ledger.len(), 1);
    }

    fn seeded_ledger() -> (PoolLedger, PoolKey) {
        let mut ledger = PoolLedger::new();
        let pool = ledger.get_or_create(pair());
        let first = pool.pair().first();
        let Ok(()) = pool.set_reserves_for(&first, Amount::new(1_000), Amount::new(4_000)) else {
            panic!("expected Ok");
        };
        let Ok(()) = pool.credit_shares(alice(), Shares::new(2_000)) else {
            panic!("expected Ok");
        };
        let key = pool.key();
        (ledger, key)
    }

    #[test]
    fn share_adjustments_keep_totals_in_step() {
        let (mut ledger, key) = seeded_ledger();
        let Ok(()) = ledger.credit_shares(&key, bob(), Shares::new(700)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.debit_shares(&key, alice(), Shares::new(200)) else {
            panic!("expected Ok");
        };
        let Some(pool) = ledger.get(&key) else {
            panic!("pool exists");
        };
        assert_eq!(pool.share_balance(&alice()), Shares::new(1_800));
        assert_eq!(pool.share_balance(&bob()), Shares::new(700));
        assert_eq!(pool.total_shares(), Shares::new(2_500));
        assert_eq!(pool.check_invariants(), Ok(()));
    }

    #[test]
    fn credit_on_uninitialized_pool_is_refused() {
        let mut ledger = PoolLedger::new();
        let key = ledger.get_or_create(pair()).key();
        let before = ledger.clone();
        assert!(matches!(
            ledger.credit_shares(&key, alice(), Shares::new(700)),
            Err(AmmError::InvariantViolation(_))
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn debit_of_every_share_over_live_reserves_is_refused() {
        let (mut ledger, key) = seeded_ledger();
        let before = ledger.clone();
        assert!(matches!(
            ledger.debit_shares(&key, alice(), Shares::new(2_000)),
            Err(AmmError::InvariantViolation(_))
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn over_debit_is_rejected() {
        let mut ledger = PoolLedger::new();
        let key = ledger.get_or_create(pair()).key();
        assert_eq!(
            ledger.debit_shares(&key, alice(), Shares::new(1)),
            Err(AmmError::InsufficientShares {
                requested: Shares::new(1),
                available: Shares::ZERO,
            })
        );
    }

    #[test]
    fn unknown_key_is_pool_not_found() {
        let mut ledger = PoolLedger::new();
        assert_eq!(
            ledger.credit_shares(&pair().key(), alice(), Shares::new(1)),
            Err(AmmError::PoolNotFound)
        );
    }

    #[test]
    fn put_replaces_entry() {
        let mut ledger = PoolLedger::new();
        let mut staged = ledger.get_or_create(pair()).clone();
        let Ok(()) = staged.credit_shares(alice(), Shares::new(5)) else {
            panic!("expected Ok");
        };
        ledger.put(staged.clone());
        assert_eq!(ledger.get(&staged.key()), Some(&staged));
    }
}
