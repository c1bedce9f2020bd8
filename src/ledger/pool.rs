//! State of a single constant-product pool.

use std::collections::HashMap;

use ethereum_types::U256;

use crate::domain::{Actor, Amount, AssetId, AssetPair, PoolKey, Shares};
use crate::error::AmmError;
use crate::math::{product, CheckedArithmetic};

/// Lifecycle state of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolStatus {
    /// No reserves and no shares; may be seeded.
    Uninitialized,
    /// Holds reserves of both assets backed by outstanding shares.
    Seeded,
}

/// Reserves, share supply and per-participant share balances of one pool.
///
/// # Invariants
///
/// Checked by [`Pool::check_invariants`] before any staged state is
/// committed to a store:
///
/// 1. `reserve_a > 0 ⇔ reserve_b > 0 ⇔ total_shares > 0`
/// 2. `Σ shares[participant] == total_shares`
///
/// Reserves are kept in the pair's canonical order: `reserve_a` belongs to
/// [`AssetPair::first`], `reserve_b` to [`AssetPair::second`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pair: AssetPair,
    key: PoolKey,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    shares: HashMap<Actor, Shares>,
}

impl Pool {
    /// Creates an empty, uninitialized pool for `pair`.
    #[must_use]
    pub fn new(pair: AssetPair) -> Self {
        Self {
            key: pair.key(),
            pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            shares: HashMap::new(),
        }
    }

    /// Returns the pool's asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the pool's key.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        self.key
    }

    /// Reserve of the pair's first asset.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of the pair's second asset.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Share balance of `actor`; zero when absent.
    #[must_use]
    pub fn share_balance(&self, actor: &Actor) -> Shares {
        self.shares.get(actor).copied().unwrap_or(Shares::ZERO)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> PoolStatus {
        if self.total_shares.is_zero() {
            PoolStatus::Uninitialized
        } else {
            PoolStatus::Seeded
        }
    }

    /// Returns `true` if the pool is seeded.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.status() == PoolStatus::Seeded
    }

    /// Constant-product invariant `reserve_a × reserve_b`, exact in 256 bits.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        product(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Returns `(reserve of asset, reserve of its counterpart)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if `asset` is not in the pool.
    pub fn reserves_for(&self, asset: &AssetId) -> Result<(Amount, Amount), AmmError> {
        if !self.pair.contains(asset) {
            return Err(AmmError::InvalidPair);
        }
        if self.pair.is_first(asset) {
            Ok((self.reserve_a, self.reserve_b))
        } else {
            Ok((self.reserve_b, self.reserve_a))
        }
    }

    /// Sets reserves oriented from `asset`'s point of view.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if `asset` is not in the pool.
    pub(crate) fn set_reserves_for(
        &mut self,
        asset: &AssetId,
        reserve_of_asset: Amount,
        reserve_of_other: Amount,
    ) -> Result<(), AmmError> {
        if !self.pair.contains(asset) {
            return Err(AmmError::InvalidPair);
        }
        if self.pair.is_first(asset) {
            self.reserve_a = reserve_of_asset;
            self.reserve_b = reserve_of_other;
        } else {
            self.reserve_b = reserve_of_asset;
            self.reserve_a = reserve_of_other;
        }
        Ok(())
    }

    /// Adds `amount` to `actor`'s balance and to the total supply.
    ///
    /// Both new values are computed before either is written, so a failure
    /// leaves the pool untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if either sum overflows.
    pub(crate) fn credit_shares(&mut self, actor: Actor, amount: Shares) -> Result<(), AmmError> {
        let balance = self.share_balance(&actor).safe_add(&amount)?;
        let total = self.total_shares.safe_add(&amount)?;
        if !balance.is_zero() {
            self.shares.insert(actor, balance);
        }
        self.total_shares = total;
        Ok(())
    }

    /// Removes `amount` from `actor`'s balance and from the total supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if the balance is too small.
    /// - [`AmmError::ArithmeticOverflow`] if the total would underflow.
    pub(crate) fn debit_shares(&mut self, actor: Actor, amount: Shares) -> Result<(), AmmError> {
        let available = self.share_balance(&actor);
        let Some(balance) = available.checked_sub(&amount) else {
            return Err(AmmError::InsufficientShares {
                requested: amount,
                available,
            });
        };
        let total = self.total_shares.safe_sub(&amount)?;
        if balance.is_zero() {
            self.shares.remove(&actor);
        } else {
            self.shares.insert(actor, balance);
        }
        self.total_shares = total;
        Ok(())
    }

    /// Verifies the ledger invariants of this state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] naming the broken invariant.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let has_a = !self.reserve_a.is_zero();
        let has_b = !self.reserve_b.is_zero();
        let has_shares = !self.total_shares.is_zero();
        if has_a != has_b || has_a != has_shares {
            return Err(AmmError::InvariantViolation(
                "reserves and share supply must be all zero or all positive",
            ));
        }

        let mut sum = Shares::ZERO;
        for balance in self.shares.values() {
            sum = sum
                .checked_add(balance)
                .ok_or(AmmError::InvariantViolation("share balances overflow"))?;
        }
        if sum != self.total_shares {
            return Err(AmmError::InvariantViolation(
                "share balances must sum to total shares",
            ));
        }
        Ok(())
    }
}
