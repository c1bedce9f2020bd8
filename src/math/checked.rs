//! Checked arithmetic trait for domain quantity types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Shares`] into [`Result`]s carrying
//! [`AmmError::ArithmeticOverflow`], so ledger code can use `?`.
//!
//! # Examples
//!
//! ```
//! use pairpool::domain::Amount;
//! use pairpool::math::CheckedArithmetic;
//!
//! assert_eq!(Amount::new(100).safe_add(&Amount::new(200)), Ok(Amount::new(300)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain quantity types.
///
/// # Contract
///
/// - No panics: every failure is an `Err`.
/// - No saturation: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("share subtraction underflow"))
    }
}
