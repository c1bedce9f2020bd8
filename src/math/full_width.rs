//! Full-width intermediates for the pricing formulas.
//!
//! Reserves, deposits and share totals are `u128`, but the formulas multiply
//! two or three of them together before dividing. Products are taken in
//! [`U256`] / [`U512`] and only the final quotient is narrowed back, so an
//! operation fails with [`AmmError::ArithmeticOverflow`] only when its
//! *result* does not fit.
//!
//! | Helper | Computes | Width |
//! |--------|----------|-------|
//! | [`product`] | `a × b` | 256 bits, exact |
//! | [`mul_div`] | `a × b / c`, rounded | 512 bits, narrowed |
//! | [`narrow`] | checked `U512 → u128` | |

use ethereum_types::{U256, U512};

use crate::domain::Rounding;
use crate::error::AmmError;
use crate::math::div_round;

/// Exact product of two `u128`s.
///
/// # Examples
///
/// ```
/// use ethereum_types::U256;
/// use pairpool::math::product;
///
/// let k = product(u128::MAX, u128::MAX);
/// assert!(k > U256::from(u128::MAX));
/// assert_eq!(product(1_000, 4_000), U256::from(4_000_000u64));
/// ```
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    // (2^128 - 1)^2 < 2^256
    U256::from(a) * U256::from(b)
}

/// Narrows a wide intermediate back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] carrying `context` if `value`
/// needs more than 128 bits.
pub fn narrow(value: U512, context: &'static str) -> Result<u128, AmmError> {
    if value.bits() > 128 {
        return Err(AmmError::ArithmeticOverflow(context));
    }
    Ok(value.low_u128())
}

/// `a × b / c` with the product held in 512 bits, rounded by `rounding`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] carrying `context` if `c` is zero
/// or the quotient does not fit `u128`.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Rounding;
/// use pairpool::math::mul_div;
///
/// // The product overflows u128 but the quotient does not.
/// let big = 10u128.pow(36);
/// assert_eq!(mul_div(big, big, big, Rounding::Down, "ctx"), Ok(big));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up, "ctx"), Ok(4));
/// ```
pub fn mul_div(
    a: u128,
    b: u128,
    c: u128,
    rounding: Rounding,
    context: &'static str,
) -> Result<u128, AmmError> {
    let quotient = div_round(U512::from(product(a, b)), U512::from(c), rounding)
        .ok_or(AmmError::ArithmeticOverflow(context))?;
    narrow(quotient, context)
}
