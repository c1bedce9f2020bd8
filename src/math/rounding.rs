//! Rounding helpers for integer division.
//!
//! [`div_round`] is the building block behind [`mul_div`](super::mul_div)
//! and the swap formulas. It works on [`U512`] so numerators built from two
//! or three `u128` factors never need truncating first.
//!
//! # Convention
//!
//! Always round against the participant:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, burn output, minted shares | [`Rounding::Down`] |
//! | Required swap input, reported fee | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use ethereum_types::U512;
//! use pairpool::domain::Rounding;
//! use pairpool::math::div_round;
//!
//! let (ten, three) = (U512::from(10u8), U512::from(3u8));
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U512::from(3u8)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U512::from(4u8)));
//! assert_eq!(div_round(ten, U512::zero(), Rounding::Down), None);
//! ```

use ethereum_types::U512;

use crate::domain::Rounding;

/// Integer division with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero, or if rounding up past
/// [`U512::MAX`] would wrap.
#[must_use]
pub fn div_round(numerator: U512, denominator: U512, rounding: Rounding) -> Option<U512> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up if !r.is_zero() => q.checked_add(U512::one()),
        Rounding::Up => Some(q),
    }
}
