//! Share accounting formulas: seeding, minting and burning.

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;
use crate::math::{mul_div, product};

/// Shares minted by the first deposit into an empty pool.
///
/// `shares = floor(√(amount_a × amount_b))`. The geometric mean makes the
/// share count independent of which asset is listed first.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero.
/// - [`AmmError::ZeroShares`] if the root truncates to zero.
///
/// The product is taken in 256 bits and its root always fits `u128`.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Shares};
/// use pairpool::pricing::seed_pool;
///
/// assert_eq!(seed_pool(Amount::new(1_000), Amount::new(4_000)), Ok(Shares::new(2_000)));
/// ```
pub fn seed_pool(amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InvalidAmount("seed deposit requires both assets"));
    }
    // √(2^256 - 1) < 2^128, so the low limb is the whole root.
    let shares = product(amount_a.get(), amount_b.get()).integer_sqrt().low_u128();
    if shares == 0 {
        return Err(AmmError::ZeroShares);
    }
    Ok(Shares::new(shares))
}

/// Shares minted for a deposit into an already seeded pool.
///
/// `shares = min(floor(a × T / R_a), floor(b × T / R_b))`. The limiting
/// asset decides; any excess of the other asset is kept by the pool.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either deposit is zero.
/// - [`AmmError::InsufficientLiquidity`] if the pool is not seeded.
/// - [`AmmError::ArithmeticOverflow`] if the minted count does not fit
///   `u128`.
/// - [`AmmError::ZeroSharesMinted`] if the deposit is too small to mint a
///   whole share.
pub fn compute_liquidity_mint(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<Shares, AmmError> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InvalidAmount("deposit requires both assets"));
    }
    if total_shares.is_zero() || reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let total = total_shares.get();
    let share_of = |amount: Amount, reserve: Amount| {
        mul_div(amount.get(), total, reserve.get(), Rounding::PAYOUT, "minted shares overflow")
    };
    let by_a = share_of(amount_a, reserve_a)?;
    let by_b = share_of(amount_b, reserve_b)?;

    let minted = core::cmp::min(by_a, by_b);
    if minted == 0 {
        return Err(AmmError::ZeroSharesMinted);
    }
    Ok(Shares::new(minted))
}

/// Reserve amounts released by burning `shares`.
///
/// Both outputs round down; a small burn may release zero of one asset.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `shares` is zero.
/// - [`AmmError::InsufficientShares`] if `shares > total_shares`.
///
/// Each output is at most its reserve, so nothing can overflow.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Shares};
/// use pairpool::pricing::compute_liquidity_burn;
///
/// let out = compute_liquidity_burn(
///     Shares::new(1_000),
///     Amount::new(1_000),
///     Amount::new(4_000),
///     Shares::new(2_000),
/// );
/// assert_eq!(out, Ok((Amount::new(500), Amount::new(2_000))));
/// ```
pub fn compute_liquidity_burn(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if shares.is_zero() {
        return Err(AmmError::InvalidAmount("burn requires a positive share count"));
    }
    if shares > total_shares {
        return Err(AmmError::InsufficientShares {
            requested: shares,
            available: total_shares,
        });
    }

    let s = shares.get();
    let total = total_shares.get();
    let out_a = mul_div(s, reserve_a.get(), total, Rounding::PAYOUT, "burn output overflow")?;
    let out_b = mul_div(s, reserve_b.get(), total, Rounding::PAYOUT, "burn output overflow")?;
    Ok((Amount::new(out_a), Amount::new(out_b)))
}
