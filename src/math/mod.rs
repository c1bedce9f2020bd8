//! Arithmetic utilities for the pricing engine.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain quantities, [`div_round`] for explicitly rounded division, and
//! full-width helpers ([`product`], [`mul_div`], [`narrow`]) that keep every
//! intermediate in 256 or 512 bits so only the final result must fit `u128`.

mod checked;
mod full_width;
mod rounding;

pub use checked::CheckedArithmetic;
pub use full_width::{mul_div, narrow, product};
pub use rounding::div_round;
