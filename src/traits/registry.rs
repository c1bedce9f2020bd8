//! Supported-asset lookup collaborator.

use crate::domain::AssetId;

/// Read-only view of the set of assets eligible for pool membership.
///
/// Consulted by pool creation only. Mutation of the set is an
/// administrative concern handled outside the pricing core; see
/// [`AssetWhitelist`](crate::registry::AssetWhitelist).
pub trait AssetRegistry {
    /// Returns `true` if `asset` may be part of a pool.
    fn is_supported(&self, asset: &AssetId) -> bool;
}

impl<R: AssetRegistry + ?Sized> AssetRegistry for &R {
    fn is_supported(&self, asset: &AssetId) -> bool {
        (**self).is_supported(asset)
    }
}
