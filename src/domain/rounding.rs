//! Rounding policy for ledger division.

/// Direction in which an inexact quotient is rounded.
///
/// The ledger always rounds in the pool's favour. [`Rounding::PAYOUT`]
/// applies to anything the pool hands out (swap outputs, burn outputs,
/// minted shares); [`Rounding::CHARGE`] applies to anything it asks for
/// (the input an exact-out swap requires, the reported fee).
///
/// ```
/// use pairpool::domain::Rounding;
///
/// assert_eq!(Rounding::PAYOUT, Rounding::Down);
/// assert_eq!(Rounding::CHARGE, Rounding::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Rounding for amounts leaving the pool.
    pub const PAYOUT: Self = Self::Down;

    /// Rounding for amounts the pool collects.
    pub const CHARGE: Self = Self::Up;
}
