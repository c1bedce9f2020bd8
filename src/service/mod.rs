//! Operation orchestration.
//!
//! [`PoolService`] is the only component that combines pricing, pool state
//! and asset movement. Every mutating operation runs to completion or
//! fails with exactly one [`AmmError`](crate::error::AmmError) and no
//! lasting effect.

mod pool_service;
mod settlement;

#[cfg(test)]
mod proptest_properties;

pub use pool_service::PoolService;
