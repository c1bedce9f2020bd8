//! Owner-gated whitelist of pool-eligible assets.

use std::collections::HashSet;

use tracing::info;

use crate::domain::{Actor, AssetId};
use crate::error::AmmError;
use crate::traits::AssetRegistry;

/// Set of assets allowed to form pools, mutable only by its owner.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Actor, AssetId};
/// use pairpool::registry::AssetWhitelist;
/// use pairpool::traits::AssetRegistry;
///
/// let owner = Actor::from_bytes([1; 20]);
/// let usdc = AssetId::from_bytes([0xAA; 20]);
///
/// let mut whitelist = AssetWhitelist::new(owner);
/// assert!(!whitelist.is_supported(&usdc));
/// assert!(whitelist.allow(owner, usdc).is_ok());
/// assert!(whitelist.is_supported(&usdc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWhitelist {
    owner: Actor,
    assets: HashSet<AssetId>,
}

impl AssetWhitelist {
    /// Creates an empty whitelist administered by `owner`.
    #[must_use]
    pub fn new(owner: Actor) -> Self {
        Self {
            owner,
            assets: HashSet::new(),
        }
    }

    /// Creates a whitelist pre-populated with `assets`.
    #[must_use]
    pub fn with_assets(owner: Actor, assets: impl IntoIterator<Item = AssetId>) -> Self {
        Self {
            owner,
            assets: assets.into_iter().collect(),
        }
    }

    /// Current administrator.
    #[must_use]
    pub const fn owner(&self) -> Actor {
        self.owner
    }

    /// Number of supported assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if no asset is supported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Marks `asset` as supported. Returns `true` if it was newly added.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the owner.
    pub fn allow(&mut self, caller: Actor, asset: AssetId) -> Result<bool, AmmError> {
        self.ensure_owner(caller)?;
        let added = self.assets.insert(asset);
        if added {
            info!(asset = %asset, supported = self.len(), "asset allowed");
        }
        Ok(added)
    }

    /// Removes `asset` from the set. Returns `true` if it was present.
    ///
    /// Existing pools holding the asset keep operating; only new pool
    /// creation consults the set.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the owner.
    pub fn revoke(&mut self, caller: Actor, asset: AssetId) -> Result<bool, AmmError> {
        self.ensure_owner(caller)?;
        let removed = self.assets.remove(&asset);
        if removed {
            info!(asset = %asset, supported = self.len(), "asset revoked");
        }
        Ok(removed)
    }

    /// Hands administration to `new_owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the owner.
    pub fn transfer_ownership(&mut self, caller: Actor, new_owner: Actor) -> Result<(), AmmError> {
        self.ensure_owner(caller)?;
        info!(from = %self.owner, to = %new_owner, "whitelist ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    fn ensure_owner(&self, caller: Actor) -> Result<(), AmmError> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(AmmError::Unauthorized)
        }
    }
}

impl AssetRegistry for AssetWhitelist {
    fn is_supported(&self, asset: &AssetId) -> bool {
        self.assets.contains(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: Actor = Actor::from_bytes([1; 20]);
    const MALLORY: Actor = Actor::from_bytes([6; 20]);
    const DAI: AssetId = AssetId::from_bytes([0xDA; 20]);

    #[test]
    fn owner_can_allow_and_revoke() {
        let mut list = AssetWhitelist::new(OWNER);
        assert_eq!(list.allow(OWNER, DAI), Ok(true));
        assert_eq!(list.allow(OWNER, DAI), Ok(false));
        assert!(list.is_supported(&DAI));
        assert_eq!(list.revoke(OWNER, DAI), Ok(true));
        assert!(!list.is_supported(&DAI));
        assert!(list.is_empty());
    }

    #[test]
    fn non_owner_is_rejected() {
        let mut list = AssetWhitelist::with_assets(OWNER, [DAI]);
        assert_eq!(list.allow(MALLORY, DAI), Err(AmmError::Unauthorized));
        assert_eq!(list.revoke(MALLORY, DAI), Err(AmmError::Unauthorized));
        assert_eq!(
            list.transfer_ownership(MALLORY, MALLORY),
            Err(AmmError::Unauthorized)
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ownership_transfer_moves_the_capability() {
        let mut list = AssetWhitelist::new(OWNER);
        assert_eq!(list.transfer_ownership(OWNER, MALLORY), Ok(()));
        assert_eq!(list.owner(), MALLORY);
        assert_eq!(list.allow(OWNER, DAI), Err(AmmError::Unauthorized));
        assert_eq!(list.allow(MALLORY, DAI), Ok(true));
    }
}
