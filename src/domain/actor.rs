//! Participant identity.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::address::{parse_hex, to_hex, ADDRESS_LEN};
use crate::error::AmmError;

/// Identity of a participant: a liquidity provider, a trader or the
/// administrator of the supported-asset set.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Actor;
///
/// let alice = Actor::from_bytes([0xAA; 20]);
/// assert_eq!(alice.to_string().parse::<Actor>().expect("valid hex"), alice);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Actor([u8; ADDRESS_LEN]);

impl Actor {
    /// Creates an `Actor` from raw bytes.
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

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}

impl FromStr for Actor {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<String> for Actor {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Actor> for String {
    fn from(actor: Actor) -> Self {
        actor.to_string()
    }
}
