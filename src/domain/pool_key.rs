//! Canonical pool identity.

use core::fmt;

use super::{AssetId, AssetPair};
use crate::error::AmmError;

/// Domain separator mixed into every pool key digest.
pub const POOL_KEY_DOMAIN: &[u8] = b"PAIRPOOL_POOL_KEY_V1";

/// Order-independent key of the pool for an unordered asset pair.
///
/// `PoolKey = BLAKE3(POOL_KEY_DOMAIN || lower || higher)` where `lower` and
/// `higher` are the two asset identifiers sorted byte-wise, so
/// `derive(a, b) == derive(b, a)`.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, PoolKey};
///
/// let x = AssetId::from_bytes([1u8; 20]);
/// let y = AssetId::from_bytes([2u8; 20]);
/// assert_eq!(PoolKey::derive(x, y).ok(), PoolKey::derive(y, x).ok());
/// assert!(PoolKey::derive(x, x).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey([u8; 32]);

impl PoolKey {
    /// Derives the key for the pair `{asset_x, asset_y}`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPair`] if the identifiers are equal.
    pub fn derive(asset_x: AssetId, asset_y: AssetId) -> Result<Self, AmmError> {
        if asset_x == asset_y {
            return Err(AmmError::InvalidPair);
        }
        let (lower, higher) = if asset_x < asset_y {
            (asset_x, asset_y)
        } else {
            (asset_y, asset_x)
        };
        Ok(Self::digest(lower, higher))
    }

    /// Key of an already validated, canonically ordered pair.
    #[must_use]
    pub fn of_pair(pair: &AssetPair) -> Self {
        Self::digest(pair.first(), pair.second())
    }

    fn digest(lower: AssetId, higher: AssetId) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_KEY_DOMAIN);
        hasher.update(lower.as_bytes());
        hasher.update(higher.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Returns the 32-byte digest.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 20])
    }

    #[test]
    fn symmetric() {
        let (Ok(k1), Ok(k2)) = (
            PoolKey::derive(asset(1), asset(2)),
            PoolKey::derive(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(k1, k2);
    }

    #[test]
    fn identical_assets_rejected() {
        assert_eq!(
            PoolKey::derive(asset(7), asset(7)),
            Err(AmmError::InvalidPair)
        );
    }

    #[test]
    fn distinct_pairs_distinct_keys() {
        let (Ok(k12), Ok(k13), Ok(k23)) = (
            PoolKey::derive(asset(1), asset(2)),
            PoolKey::derive(asset(1), asset(3)),
            PoolKey::derive(asset(2), asset(3)),
        ) else {
            panic!("expected Ok");
        };
        assert_ne!(k12, k13);
        assert_ne!(k12, k23);
        assert_ne!(k13, k23);
    }

    #[test]
    fn matches_domain_separated_digest() {
        let Ok(key) = PoolKey::derive(asset(9), asset(3)) else {
            panic!("expected Ok");
        };
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_KEY_DOMAIN);
        hasher.update(&[3u8; 20]);
        hasher.update(&[9u8; 20]);
        assert_eq!(key.as_bytes(), hasher.finalize().as_bytes());
    }

    #[test]
    fn pair_key_matches_derive() {
        let (Ok(pair), Ok(key)) = (
            AssetPair::new(asset(5), asset(4)),
            PoolKey::derive(asset(4), asset(5)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(PoolKey::of_pair(&pair), key);
    }

    #[test]
    fn display_is_full_hex() {
        let Ok(key) = PoolKey::derive(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let shown = key.to_string();
        assert!(shown.starts_with("0x"));
        assert_eq!(shown.len(), 2 + 64);
    }
}
