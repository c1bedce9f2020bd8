//! Value types of the ledger domain.
//!
//! Identifiers ([`AssetId`], [`Actor`], [`PoolKey`]), quantities
//! ([`Amount`], [`Shares`]) and operation receipts. Quantities are
//! newtypes over `u128` with checked arithmetic; identifiers are fixed-size
//! byte arrays with hex text forms.

mod actor;
mod address;
mod amount;
mod asset_id;
mod asset_pair;
mod pool_key;
mod receipt;
mod rounding;
mod shares;

pub use actor::Actor;
pub use address::ADDRESS_LEN;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use pool_key::{PoolKey, POOL_KEY_DOMAIN};
pub use receipt::{LiquidityReceipt, SwapReceipt};
pub use rounding::Rounding;
pub use shares::Shares;
