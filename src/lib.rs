//! # pairpool
//!
//! Constant-product AMM ledger: two-asset pools whose reserves back
//! fungible shares, priced by `x · y = k` with a 0.3% fee retained by the
//! pool.
//!
//! The crate is the accounting and pricing core. Moving assets, deciding
//! which assets may form pools and storing pool state are collaborators
//! injected through traits, so hosts and tests can supply their own.
//!
//! ## Seed a pool and execute a swap
//!
//! ```rust
//! use pairpool::custody::MemoryCustody;
//! use pairpool::domain::{Actor, Amount, AssetId, Shares};
//! use pairpool::ledger::PoolLedger;
//! use pairpool::registry::AssetWhitelist;
//! use pairpool::service::PoolService;
//!
//! let admin = Actor::from_bytes([0x01; 20]);
//! let alice = Actor::from_bytes([0xA1; 20]);
//! let usdc = AssetId::from_bytes([0xAA; 20]);
//! let weth = AssetId::from_bytes([0xBB; 20]);
//!
//! // 1. Fund a participant and whitelist both assets
//! let mut custody = MemoryCustody::new();
//! custody.mint(usdc, alice, Amount::new(10_000)).expect("mint");
//! custody.mint(weth, alice, Amount::new(10_000)).expect("mint");
//! let registry = AssetWhitelist::with_assets(admin, [usdc, weth]);
//!
//! // 2. Seed the pool: floor(√(1000 × 4000)) = 2000 shares
//! let mut service = PoolService::new(PoolLedger::new(), custody, registry);
//! let seeded = service
//!     .create_pool(usdc, weth, Amount::new(1_000), Amount::new(4_000), alice)
//!     .expect("pool created");
//! assert_eq!(seeded.shares(), Shares::new(2_000));
//!
//! // 3. Sell 100 USDC with a minimum of 350 WETH out
//! let swapped = service
//!     .swap(usdc, weth, Amount::new(100), Amount::new(350), alice)
//!     .expect("swap executed");
//! assert_eq!(swapped.amount_out(), Amount::new(362));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  create_pool / swap / add_liquidity / remove_liquidity
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   AssetRegistry: is_supported
//! │  PoolService  │── AssetCustody:  transfer_in / transfer_out
//! └──────┬───────┘
//!        │ prices with            stages + commits through
//!        ▼                        ▼
//! ┌──────────────┐   ┌──────────────┐
//! │   pricing     │   │  PoolStore    │  PoolLedger: PoolKey → Pool
//! └──────┬───────┘   └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │ domain, math  │  Amount, Shares, AssetPair, PoolKey, mul_div, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetId`](domain::AssetId), [`PoolKey`](domain::PoolKey), receipts |
//! | [`pricing`] | Pure swap, mint and burn formulas |
//! | [`ledger`] | [`Pool`](ledger::Pool) state and the in-memory [`PoolLedger`](ledger::PoolLedger) |
//! | [`service`] | [`PoolService`](service::PoolService) operation orchestration |
//! | [`traits`] | Collaborator seams: [`AssetCustody`](traits::AssetCustody), [`AssetRegistry`](traits::AssetRegistry), [`PoolStore`](traits::PoolStore) |
//! | [`registry`] | Owner-gated [`AssetWhitelist`](registry::AssetWhitelist) |
//! | [`custody`] | In-memory [`MemoryCustody`](custody::MemoryCustody) |
//! | [`config`] | [`LedgerConfig`](config::LedgerConfig) loaded from TOML |
//! | [`math`] | Checked arithmetic, rounding division, full-width products |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Operations emit [`tracing`] events: `debug` for quotes and staged
//! amounts, `info` for committed operations, `warn` for slippage
//! rejections and `error` for transfers that could not be unwound. The
//! crate installs no subscriber.

pub mod config;
pub mod custody;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod registry;
pub mod service;
pub mod traits;
