//! Fungible asset identifier.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::address::{parse_hex, to_hex, ADDRESS_LEN};
use crate::error::AmmError;

/// Opaque, externally issued identifier of a fungible asset.
///
/// Wraps a 160-bit address. Identifiers are totally ordered byte-wise;
/// that order is what makes pool identity independent of argument order.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AssetId;
///
/// let usdc: AssetId = "0x0101010101010101010101010101010101010101".parse().expect("valid hex");
/// assert_eq!(usdc, AssetId::from_bytes([1u8; 20]));
/// assert_eq!(usdc.to_string(), "0x0101010101010101010101010101010101010101");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId([u8; ADDRESS_LEN]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}

impl FromStr for AssetId {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<String> for AssetId {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.to_string()
    }
}
