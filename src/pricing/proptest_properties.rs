//! Property-based tests for the pricing engine.
//!
//! 1. **Invariant monotonicity**: `R_a' × R_b' > R_a × R_b` after a swap,
//!    and any pair of `u128` reserves prices without overflow.
//! 2. **No value creation on burn**: outputs never exceed reserves.
//! 3. **Round-trip bound**: mint then burn returns at most the deposit.
//! 4. **Exact-out sufficiency**: the quoted input buys the requested output.
//! 5. **Pool key symmetry**: `derive(x, y) == derive(y, x)`.

use proptest::prelude::*;

use super::{
    compute_liquidity_burn, compute_liquidity_mint, compute_swap_input, compute_swap_output,
    seed_pool,
};
use crate::domain::{Amount, AssetId, PoolKey, Shares};
use crate::math::product;

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000u128
}

fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn swap_strictly_grows_product(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let out = compute_swap_output(
            Amount::new(reserve_in),
            Amount::new(reserve_out),
            Amount::new(amount_in),
        );
        let Ok(out) = out else {
            return Err(TestCaseError::fail("swap within bounds must price"));
        };
        prop_assert!(out.get() < reserve_out);

        let new_in = reserve_in + amount_in;
        let new_out = reserve_out - out.get();
        prop_assert!(product(new_in, new_out) > product(reserve_in, reserve_out));
    }

    #[test]
    fn swap_prices_full_range_reserves(
        reserve_in in 1u128..=u128::MAX,
        reserve_out in 1u128..=u128::MAX,
        amount_in in 1u128..=u128::MAX,
    ) {
        let out = compute_swap_output(
            Amount::new(reserve_in),
            Amount::new(reserve_out),
            Amount::new(amount_in),
        );
        let Ok(out) = out else {
            return Err(TestCaseError::fail("u128 reserves must price"));
        };
        prop_assert!(out.get() < reserve_out);
    }

    #[test]
    fn burn_never_exceeds_reserves(
        reserve_a in reserve_strategy(),
        reserve_b in reserve_strategy(),
        total in 1u128..=1_000_000_000u128,
        fraction in 1u128..=1_000u128,
    ) {
        let shares = (total * fraction / 1_000).max(1);
        let Ok((out_a, out_b)) = compute_liquidity_burn(
            Shares::new(shares),
            Amount::new(reserve_a),
            Amount::new(reserve_b),
            Shares::new(total),
        ) else {
            return Err(TestCaseError::fail("burn within bounds must succeed"));
        };
        prop_assert!(out_a.get() <= reserve_a);
        prop_assert!(out_b.get() <= reserve_b);
        if shares == total {
            prop_assert_eq!(out_a.get(), reserve_a);
            prop_assert_eq!(out_b.get(), reserve_b);
        }
    }

    #[test]
    fn mint_then_burn_never_gains(
        seed_a in reserve_strategy(),
        seed_b in reserve_strategy(),
        dep_a in trade_strategy(),
        dep_b in trade_strategy(),
    ) {
        let Ok(total) = seed_pool(Amount::new(seed_a), Amount::new(seed_b)) else {
            return Err(TestCaseError::fail("seed within bounds must succeed"));
        };
        let minted = compute_liquidity_mint(
            Amount::new(dep_a),
            Amount::new(dep_b),
            Amount::new(seed_a),
            Amount::new(seed_b),
            total,
        );
        // Deposits that are too small to mint are rejected, nothing to burn.
        let Ok(minted) = minted else {
            return Ok(());
        };

        let reserve_a = seed_a + dep_a;
        let reserve_b = seed_b + dep_b;
        let Some(total_after) = total.checked_add(&minted) else {
            return Err(TestCaseError::fail("share total overflow"));
        };
        let Ok((back_a, back_b)) = compute_liquidity_burn(
            minted,
            Amount::new(reserve_a),
            Amount::new(reserve_b),
            total_after,
        ) else {
            return Err(TestCaseError::fail("burn of minted shares must succeed"));
        };
        prop_assert!(back_a.get() <= dep_a);
        prop_assert!(back_b.get() <= dep_b);
    }

    #[test]
    fn exact_out_quote_is_sufficient(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        numerator in 1u128..=999u128,
    ) {
        let wanted = (reserve_out * numerator / 1_000).max(1);
        let Ok(needed) = compute_swap_input(
            Amount::new(reserve_in),
            Amount::new(reserve_out),
            Amount::new(wanted),
        ) else {
            return Err(TestCaseError::fail("exact-out within bounds must price"));
        };
        let Ok(got) = compute_swap_output(Amount::new(reserve_in), Amount::new(reserve_out), needed)
        else {
            return Err(TestCaseError::fail("quoted input must price"));
        };
        prop_assert!(got.get() >= wanted);

        if needed.get() > 1 {
            let less = compute_swap_output(
                Amount::new(reserve_in),
                Amount::new(reserve_out),
                Amount::new(needed.get() - 1),
            );
            if let Ok(less) = less {
                prop_assert!(less.get() < wanted);
            }
        }
    }

    #[test]
    fn pool_key_is_symmetric(x in any::<[u8; 20]>(), y in any::<[u8; 20]>()) {
        let (x, y) = (AssetId::from_bytes(x), AssetId::from_bytes(y));
        if x == y {
            prop_assert!(PoolKey::derive(x, y).is_err());
        } else {
            prop_assert_eq!(PoolKey::derive(x, y), PoolKey::derive(y, x));
        }
    }
}
