//! Operation orchestration over a pool store and its collaborators.

use tracing::{debug, info, warn};

use super::settlement::Settlement;
use crate::domain::{
    Actor, Amount, AssetId, AssetPair, LiquidityReceipt, PoolKey, Shares, SwapReceipt,
};
use crate::error::AmmError;
use crate::ledger::Pool;
use crate::math::CheckedArithmetic;
use crate::pricing::{
    compute_liquidity_burn, compute_liquidity_mint, compute_swap_input, compute_swap_output,
    seed_pool, swap_fee,
};
use crate::traits::{AssetCustody, AssetRegistry, PoolStore};

/// Entry point for every ledger operation.
///
/// Owns an injected [`PoolStore`], [`AssetCustody`] and [`AssetRegistry`].
/// Each mutating operation:
///
/// 1. validates its arguments and reads the pool,
/// 2. prices the operation with the pure functions in
///    [`pricing`](crate::pricing),
/// 3. stages the new pool state on a copy and checks every invariant,
/// 4. collects inputs, commits the staged state, then disburses outputs.
///
/// Any failure restores the pool snapshot taken in step 1 and reverses the
/// transfers already made, so a call either completes or leaves no trace.
///
/// Mutating operations take `&mut self`, which serializes them and rules
/// out a custody callback re-entering the service mid-operation.
#[derive(Debug, Clone)]
pub struct PoolService<S, C, R> {
    store: S,
    custody: C,
    registry: R,
}

impl<S, C, R> PoolService<S, C, R>
where
    S: PoolStore,
    C: AssetCustody,
    R: AssetRegistry,
{
    /// Assembles a service from its collaborators.
    pub const fn new(store: S, custody: C, registry: R) -> Self {
        Self {
            store,
            custody,
            registry,
        }
    }

    /// Seeds the pool for `(asset_a, asset_b)` with the first deposit and
    /// credits `floor(√(amount_a × amount_b))` shares to `actor`.
    ///
    /// Also reseeds a pool that has been fully drained.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::UnsupportedAsset`] if an asset is not whitelisted.
    /// - [`AmmError::PoolExists`] if the pool is already seeded.
    /// - [`AmmError::ZeroShares`] if the deposit is too small.
    /// - [`AmmError::TransferFailed`] if collecting either asset fails.
    pub fn create_pool(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a: Amount,
        amount_b: Amount,
        actor: Actor,
    ) -> Result<LiquidityReceipt, AmmError> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount("seed deposit must be positive"));
        }
        for asset in [asset_a, asset_b] {
            if !self.registry.is_supported(&asset) {
                return Err(AmmError::UnsupportedAsset(asset));
            }
        }

        // The entry is only written to the store at commit.
        let snapshot = self
            .store
            .get(&pair.key())
            .cloned()
            .unwrap_or_else(|| Pool::new(pair));
        if snapshot.is_seeded() {
            return Err(AmmError::PoolExists);
        }
        let shares = seed_pool(amount_a, amount_b)?;

        let mut staged = snapshot.clone();
        staged.set_reserves_for(&asset_a, amount_a, amount_b)?;
        staged.credit_shares(actor, shares)?;
        debug!(pool = %staged.key(), %shares, "staged pool seed");

        self.settle(
            snapshot,
            staged,
            actor,
            &[(asset_a, amount_a), (asset_b, amount_b)],
            &[],
        )?;

        let key = pair.key();
        info!(
            pool = %key,
            actor = %actor,
            amount_a = %amount_a,
            amount_b = %amount_b,
            %shares,
            "pool created"
        );
        Ok(LiquidityReceipt::new(key, amount_a, amount_b, shares))
    }

    /// Sells exactly `amount_in` of `asset_in` for as much `asset_out` as
    /// the pool pays, which must be at least `min_amount_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero, or if it buys
    ///   nothing and `min_amount_out` is zero.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::PoolNotFound`] if the pool is not seeded.
    /// - [`AmmError::InsufficientLiquidity`] if the output would drain the
    ///   pool.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`, including a zero output against a positive
    ///   minimum.
    /// - [`AmmError::TransferFailed`] if a transfer fails.
    pub fn swap(
        &mut self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        actor: Actor,
    ) -> Result<SwapReceipt, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be positive"));
        }
        let pair = AssetPair::new(asset_in, asset_out)?;
        let pool = self.seeded_pool(&pair)?;

        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in)?;
        let amount_out = compute_swap_output(reserve_in, reserve_out, amount_in)?;
        debug!(pool = %pool.key(), %amount_in, %amount_out, "swap quoted");
        if amount_out < min_amount_out {
            warn!(
                pool = %pool.key(),
                limit = %min_amount_out,
                actual = %amount_out,
                "swap rejected: slippage"
            );
            return Err(AmmError::SlippageExceeded {
                limit: min_amount_out,
                actual: amount_out,
            });
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidAmount("swap input too small to buy anything"));
        }

        self.execute_swap(&pair, asset_in, amount_in, amount_out, actor)
    }

    /// Buys exactly `amount_out` of `asset_out`, paying the smallest input
    /// the pool accepts, which must not exceed `max_amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::PoolNotFound`] if the pool is not seeded.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is not below
    ///   the reserve.
    /// - [`AmmError::SlippageExceeded`] if the required input is above
    ///   `max_amount_in`.
    /// - [`AmmError::TransferFailed`] if a transfer fails.
    pub fn swap_exact_out(
        &mut self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
        max_amount_in: Amount,
        actor: Actor,
    ) -> Result<SwapReceipt, AmmError> {
        if amount_out.is_zero() {
            return Err(AmmError::InvalidAmount("swap output must be positive"));
        }
        let pair = AssetPair::new(asset_in, asset_out)?;
        let pool = self.seeded_pool(&pair)?;

        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in)?;
        let amount_in = compute_swap_input(reserve_in, reserve_out, amount_out)?;
        debug!(pool = %pool.key(), %amount_in, %amount_out, "exact-out swap quoted");
        if amount_in > max_amount_in {
            warn!(
                pool = %pool.key(),
                limit = %max_amount_in,
                actual = %amount_in,
                "swap rejected: slippage"
            );
            return Err(AmmError::SlippageExceeded {
                limit: max_amount_in,
                actual: amount_in,
            });
        }

        self.execute_swap(&pair, asset_in, amount_in, amount_out, actor)
    }

    /// Deposits `(amount_a, amount_b)` into a seeded pool and credits the
    /// shares [`compute_liquidity_mint`] grants.
    ///
    /// The whole deposit is collected even when it does not match the
    /// reserve ratio; the surplus of the over-supplied asset stays in the
    /// pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::PoolNotFound`] if the pool is not seeded.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::ZeroSharesMinted`] if the deposit mints nothing.
    /// - [`AmmError::TransferFailed`] if collecting either asset fails.
    pub fn add_liquidity(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a: Amount,
        amount_b: Amount,
        actor: Actor,
    ) -> Result<LiquidityReceipt, AmmError> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let snapshot = self.seeded_pool(&pair)?.clone();

        let (reserve_a, reserve_b) = snapshot.reserves_for(&asset_a)?;
        let shares = compute_liquidity_mint(
            amount_a,
            amount_b,
            reserve_a,
            reserve_b,
            snapshot.total_shares(),
        )?;

        let mut staged = snapshot.clone();
        staged.set_reserves_for(
            &asset_a,
            reserve_a.safe_add(&amount_a)?,
            reserve_b.safe_add(&amount_b)?,
        )?;
        staged.credit_shares(actor, shares)?;
        debug!(pool = %staged.key(), %shares, "staged liquidity mint");

        self.settle(
            snapshot,
            staged,
            actor,
            &[(asset_a, amount_a), (asset_b, amount_b)],
            &[],
        )?;

        let key = pair.key();
        info!(
            pool = %key,
            actor = %actor,
            amount_a = %amount_a,
            amount_b = %amount_b,
            %shares,
            "liquidity added"
        );
        Ok(LiquidityReceipt::new(key, amount_a, amount_b, shares))
    }

    /// Burns `shares` of `actor`'s balance and pays out the proportional
    /// slice of both reserves.
    ///
    /// Burning the last outstanding shares drains the pool back to its
    /// uninitialized state.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::PoolNotFound`] if the pool is not seeded.
    /// - [`AmmError::InsufficientShares`] if `actor` holds fewer shares.
    /// - [`AmmError::TransferFailed`] if paying out either asset fails.
    pub fn remove_liquidity(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
        shares: Shares,
        actor: Actor,
    ) -> Result<LiquidityReceipt, AmmError> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("shares to burn must be positive"));
        }
        let snapshot = self.seeded_pool(&pair)?.clone();

        let available = snapshot.share_balance(&actor);
        if available < shares {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available,
            });
        }

        let (reserve_a, reserve_b) = snapshot.reserves_for(&asset_a)?;
        let (amount_a, amount_b) =
            compute_liquidity_burn(shares, reserve_a, reserve_b, snapshot.total_shares())?;

        let mut staged = snapshot.clone();
        staged.debit_shares(actor, shares)?;
        staged.set_reserves_for(
            &asset_a,
            reserve_a.safe_sub(&amount_a)?,
            reserve_b.safe_sub(&amount_b)?,
        )?;
        debug!(pool = %staged.key(), %amount_a, %amount_b, "staged liquidity burn");

        self.settle(
            snapshot,
            staged,
            actor,
            &[],
            &[(asset_a, amount_a), (asset_b, amount_b)],
        )?;

        let key = pair.key();
        info!(
            pool = %key,
            actor = %actor,
            amount_a = %amount_a,
            amount_b = %amount_b,
            %shares,
            "liquidity removed"
        );
        Ok(LiquidityReceipt::new(key, amount_a, amount_b, shares))
    }

    /// Reserves of `(asset_a, asset_b)` in argument order.
    ///
    /// Returns `(0, 0)` for an unknown or uninitialized pool, or when both
    /// arguments name the same asset.
    #[must_use]
    pub fn get_reserves(&self, asset_a: AssetId, asset_b: AssetId) -> (Amount, Amount) {
        self.pool(asset_a, asset_b)
            .and_then(|pool| pool.reserves_for(&asset_a).ok())
            .unwrap_or((Amount::ZERO, Amount::ZERO))
    }

    /// Shares `actor` holds in the pool for `(asset_a, asset_b)`; zero when
    /// there is no such pool or balance.
    #[must_use]
    pub fn get_share_balance(&self, asset_a: AssetId, asset_b: AssetId, actor: Actor) -> Shares {
        self.pool(asset_a, asset_b)
            .map_or(Shares::ZERO, |pool| pool.share_balance(&actor))
    }

    /// Output [`swap`](Self::swap) would pay for `amount_in` right now.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), minus slippage and transfer failures.
    pub fn quote_swap(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let pair = AssetPair::new(asset_in, asset_out)?;
        let pool = self.seeded_pool(&pair)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in)?;
        compute_swap_output(reserve_in, reserve_out, amount_in)
    }

    /// Stored state of the pool for `(asset_a, asset_b)`, if any entry
    /// exists.
    #[must_use]
    pub fn pool(&self, asset_a: AssetId, asset_b: AssetId) -> Option<&Pool> {
        let key = PoolKey::derive(asset_a, asset_b).ok()?;
        self.store.get(&key)
    }

    /// The pool store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The custody collaborator.
    #[must_use]
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Mutable access to the custody collaborator, e.g. to fund accounts.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// The asset registry.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the asset registry for administration.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Splits the service back into its collaborators.
    pub fn into_parts(self) -> (S, C, R) {
        (self.store, self.custody, self.registry)
    }

    fn seeded_pool(&self, pair: &AssetPair) -> Result<&Pool, AmmError> {
        self.store
            .get(&pair.key())
            .filter(|pool| pool.is_seeded())
            .ok_or(AmmError::PoolNotFound)
    }

    fn execute_swap(
        &mut self,
        pair: &AssetPair,
        asset_in: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        actor: Actor,
    ) -> Result<SwapReceipt, AmmError> {
        let asset_out = pair.other(&asset_in)?;
        let snapshot = self.seeded_pool(pair)?.clone();
        let fee = swap_fee(amount_in)?;

        let (reserve_in, reserve_out) = snapshot.reserves_for(&asset_in)?;
        let mut staged = snapshot.clone();
        staged.set_reserves_for(
            &asset_in,
            reserve_in.safe_add(&amount_in)?,
            reserve_out.safe_sub(&amount_out)?,
        )?;
        if staged.invariant() < snapshot.invariant() {
            return Err(AmmError::InvariantViolation(
                "swap decreased the constant product",
            ));
        }

        self.settle(
            snapshot,
            staged,
            actor,
            &[(asset_in, amount_in)],
            &[(asset_out, amount_out)],
        )?;

        let key = pair.key();
        info!(
            pool = %key,
            actor = %actor,
            asset_in = %asset_in,
            %amount_in,
            %amount_out,
            %fee,
            "swap executed"
        );
        Ok(SwapReceipt::new(
            key, asset_in, asset_out, amount_in, amount_out, fee,
        ))
    }

    /// Moves assets and commits `staged`, in debit-before-credit order.
    ///
    /// Inputs are collected first; `staged` is committed only once every
    /// input has arrived; outputs are paid last. A failure at any step puts
    /// `snapshot` back and reverses the completed transfers. A failure
    /// before commit writes nothing, so a pool that did not exist still
    /// does not.
    fn settle(
        &mut self,
        snapshot: Pool,
        staged: Pool,
        actor: Actor,
        inputs: &[(AssetId, Amount)],
        outputs: &[(AssetId, Amount)],
    ) -> Result<(), AmmError> {
        staged.check_invariants()?;

        let mut settlement = Settlement::new(&mut self.custody, actor);
        for &(asset, amount) in inputs {
            if let Err(err) = settlement.collect(asset, amount) {
                settlement.unwind();
                return Err(err);
            }
        }

        self.store.put(staged);

        for &(asset, amount) in outputs {
            if let Err(err) = settlement.disburse(asset, amount) {
                self.store.put(snapshot);
                settlement.unwind();
                return Err(err);
            }
        }
        Ok(())
    }
}
