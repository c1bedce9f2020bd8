//! Pure pricing engine for constant-product pools.
//!
//! Every function here is stateless: it takes the relevant slice of pool
//! state by value and returns the amounts an operation would move. Nothing
//! touches the ledger or the custody collaborators.
//!
//! # Formulas
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`seed_pool`] | `floor(√(a × b))` |
//! | [`compute_swap_output`] | `floor(Δin·997 × R_out / (R_in·1000 + Δin·997))` |
//! | [`compute_swap_input`] | `ceil(R_in × Δout·1000 / ((R_out − Δout)·997))` |
//! | [`compute_liquidity_mint`] | `min(floor(a·T / R_a), floor(b·T / R_b))` |
//! | [`compute_liquidity_burn`] | `(floor(s·R_a / T), floor(s·R_b / T))` |
//!
//! The fee is deducted from the input before the invariant is applied, so
//! it stays inside the pool and `R_a × R_b` strictly grows with every swap.
//!
//! Products are formed in 256/512 bits (see [`crate::math`]); only a result
//! that does not fit `u128` raises
//! [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow).

mod liquidity;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{compute_liquidity_burn, compute_liquidity_mint, seed_pool};
pub use swap::{compute_swap_input, compute_swap_output, swap_fee};

/// Fee numerator: 3 / 1000 = 0.3%.
pub const FEE_NUMERATOR: u128 = 3;

/// Fee denominator shared by every pool.
pub const FEE_DENOMINATOR: u128 = 1_000;
