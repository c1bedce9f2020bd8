//! Swap pricing.

use ethereum_types::U512;

use super::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::domain::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::{div_round, mul_div, narrow};

/// Fee-adjusted multiplier applied to every swap input (997).
const FEE_COMPLEMENT: u128 = FEE_DENOMINATOR - FEE_NUMERATOR;

fn wide(value: u128) -> U512 {
    U512::from(value)
}

/// Computes the output of selling `amount_in` into a pool.
///
/// ```text
/// amount_in_after_fee = amount_in × 997
/// amount_out = floor(amount_in_after_fee × reserve_out /
///                    (reserve_in × 1000 + amount_in_after_fee))
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or the
///   output would reach `reserve_out`.
///
/// Intermediates are 512-bit, so any pair of `u128` reserves prices.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Amount;
/// use pairpool::pricing::compute_swap_output;
///
/// let out = compute_swap_output(Amount::new(1_000), Amount::new(4_000), Amount::new(100));
/// assert_eq!(out, Ok(Amount::new(362)));
/// ```
pub fn compute_swap_output(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("swap input must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    // in × 997 × R_out < 2^266 and R_in × 1000 + in × 997 < 2^139: no wrap.
    let after_fee = wide(amount_in.get()) * wide(FEE_COMPLEMENT);
    let numerator = after_fee * wide(reserve_out.get());
    let denominator = wide(reserve_in.get()) * wide(FEE_DENOMINATOR) + after_fee;

    let quotient =
        div_round(numerator, denominator, Rounding::PAYOUT).ok_or(AmmError::InsufficientLiquidity)?;
    let amount_out = Amount::new(narrow(quotient, "swap output exceeds 128 bits")?);

    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(amount_out)
}

/// Computes the smallest input that buys at least `amount_out`.
///
/// ```text
/// amount_in = ceil(reserve_in × amount_out × 1000 /
///                  ((reserve_out − amount_out) × 997))
/// ```
///
/// Feeding the result back into [`compute_swap_output`] yields at least
/// `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::ArithmeticOverflow`] if the required input does not fit
///   `u128`.
pub fn compute_swap_input(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount("swap output must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = wide(reserve_in.get()) * wide(amount_out.get()) * wide(FEE_DENOMINATOR);
    // amount_out < reserve_out was checked above.
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = wide(remaining) * wide(FEE_COMPLEMENT);

    let quotient =
        div_round(numerator, denominator, Rounding::CHARGE).ok_or(AmmError::InsufficientLiquidity)?;
    narrow(quotient, "exact-out input exceeds 128 bits").map(Amount::new)
}

/// Fee portion of `amount_in` retained by the pool, rounded up.
///
/// Informational: the pricing formulas already discount the input by the
/// fee; this reports how much of the input that discount represents.
///
/// # Errors
///
/// Never fails for a `u128` input; the `Result` mirrors the other pricing
/// functions.
pub fn swap_fee(amount_in: Amount) -> Result<Amount, AmmError> {
    mul_div(
        amount_in.get(),
        FEE_NUMERATOR,
        FEE_DENOMINATOR,
        Rounding::CHARGE,
        "fee overflow",
    )
    .map(Amount::new)
}
