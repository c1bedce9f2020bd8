//! Pool state and its default in-memory store.
//!
//! [`Pool`] holds one pair's reserves and share balances and is the only
//! place share balances change. [`PoolLedger`] maps pool keys to pools and
//! implements [`PoolStore`](crate::traits::PoolStore).

mod pool;
mod pool_ledger;

pub use pool::{Pool, PoolStatus};
pub use pool_ledger::PoolLedger;
