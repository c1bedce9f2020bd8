//! Success payloads of mutating ledger operations.

use core::fmt;

use super::{Amount, AssetId, PoolKey, Shares};

/// Outcome of a swap: what was collected, what was paid out, and the fee
/// portion of the input that stayed in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    pool_key: PoolKey,
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    pub(crate) const fn new(
        pool_key: PoolKey,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            pool_key,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Key of the pool that executed the swap.
    #[must_use]
    pub const fn pool_key(&self) -> PoolKey {
        self.pool_key
    }

    /// Asset sold by the trader.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Asset bought by the trader.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Amount collected from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount disbursed to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee retained by the pool, denominated in `asset_in`.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

/// Outcome of a liquidity mint or burn.
///
/// `amount_a` and `amount_b` follow the caller's argument order, not the
/// pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityReceipt {
    pool_key: PoolKey,
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
}

impl LiquidityReceipt {
    pub(crate) const fn new(
        pool_key: PoolKey,
        amount_a: Amount,
        amount_b: Amount,
        shares: Shares,
    ) -> Self {
        Self {
            pool_key,
            amount_a,
            amount_b,
            shares,
        }
    }

    /// Key of the affected pool.
    #[must_use]
    pub const fn pool_key(&self) -> PoolKey {
        self.pool_key
    }

    /// Amount of the caller's first asset moved.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the caller's second asset moved.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted or burned.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

impl fmt::Display for LiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LiquidityReceipt(a={}, b={}, shares={})",
            self.amount_a, self.amount_b, self.shares
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn key() -> PoolKey {
        let Ok(k) = PoolKey::derive(AssetId::from_bytes([1; 20]), AssetId::from_bytes([2; 20]))
        else {
            panic!("expected Ok");
        };
        k
    }

    #[test]
    fn swap_receipt_display() {
        let r = SwapReceipt::new(
            key(),
            AssetId::from_bytes([1; 20]),
            AssetId::from_bytes([2; 20]),
            Amount::new(100),
            Amount::new(362),
            Amount::new(1),
        );
        assert_eq!(r.to_string(), "SwapReceipt(in=100, out=362, fee=1)");
        assert_eq!(r.pool_key(), key());
    }

    #[test]
    fn liquidity_receipt_accessors() {
        let r = LiquidityReceipt::new(key(), Amount::new(500), Amount::new(2_000), Shares::new(1_000));
        assert_eq!(r.amount_a(), Amount::new(500));
        assert_eq!(r.amount_b(), Amount::new(2_000));
        assert_eq!(r.shares(), Shares::new(1_000));
        assert_eq!(r.to_string(), "LiquidityReceipt(a=500, b=2000, shares=1000)");
    }
}
