//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```

pub use crate::domain::{
    Actor, Amount, AssetId, AssetPair, LiquidityReceipt, PoolKey, Rounding, Shares, SwapReceipt,
};

pub use crate::traits::{AssetCustody, AssetRegistry, PoolStore};

pub use crate::math::CheckedArithmetic;

pub use crate::config::LedgerConfig;

pub use crate::error::{AmmError, Result, TransferError};

pub use crate::custody::MemoryCustody;
pub use crate::ledger::{Pool, PoolLedger, PoolStatus};
pub use crate::registry::AssetWhitelist;
pub use crate::service::PoolService;
