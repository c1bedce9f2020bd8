//! Canonically ordered pair of distinct assets.

use super::{AssetId, PoolKey};
use crate::error::AmmError;

/// An unordered pair of distinct assets, stored sorted by identifier.
///
/// The canonical ordering guarantees `first() < second()`, so `(A, B)` and
/// `(B, A)` produce the same pair, the same [`PoolKey`] and the same
/// reserve orientation inside the ledger.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    first: AssetId,
    second: AssetId,
}

impl AssetPair {
    /// Creates the canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identifiers are equal.
    pub fn new(asset_x: AssetId, asset_y: AssetId) -> Result<Self, AmmError> {
        if asset_x == asset_y {
            return Err(AmmError::IdenticalAssets);
        }
        let (first, second) = if asset_x < asset_y {
            (asset_x, asset_y)
        } else {
            (asset_y, asset_x)
        };
        Ok(Self { first, second })
    }

    /// Returns the lower identifier.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// Returns the higher identifier.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Returns `true` if `asset` is one of the two members.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.first == *asset || self.second == *asset
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if `asset` is not a member.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, AmmError> {
        if *asset == self.first {
            Ok(self.second)
        } else if *asset == self.second {
            Ok(self.first)
        } else {
            Err(AmmError::InvalidPair)
        }
    }

    /// Returns `true` if `asset` is the canonical first member.
    #[must_use]
    pub fn is_first(&self, asset: &AssetId) -> bool {
        self.first == *asset
    }

    /// Derives the pool key of this pair.
    #[must_use]
    pub fn key(&self) -> PoolKey {
        PoolKey::of_pair(self)
    }
}
