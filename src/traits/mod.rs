//! Collaborator and storage abstractions.
//!
//! The ledger core depends on three seams: [`AssetCustody`] to move
//! assets, [`AssetRegistry`] to check which assets may form pools, and
//! [`PoolStore`] to hold pool state. The service is generic over all three
//! so hosts and tests can inject their own implementations.

mod custody;
mod pool_store;
mod registry;

pub use custody::AssetCustody;
pub use pool_store::PoolStore;
pub use registry::AssetRegistry;
