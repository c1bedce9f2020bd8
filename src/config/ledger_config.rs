//! Declarative ledger configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Actor, AssetId};
use crate::error::AmmError;
use crate::registry::AssetWhitelist;

/// Blueprint for a ledger deployment: who administers the supported-asset
/// set and which assets it starts with.
///
/// # TOML Form
///
/// ```toml
/// owner = "0x0101010101010101010101010101010101010101"
/// supported_assets = [
///     "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
///     "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
/// ]
/// ```
///
/// # Validation
///
/// - `supported_assets` must not list the same asset twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    owner: Actor,
    #[serde(default)]
    supported_assets: Vec<AssetId>,
}

impl LedgerConfig {
    /// Creates a new `LedgerConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if an asset is listed
    /// twice.
    pub fn new(owner: Actor, supported_assets: Vec<AssetId>) -> Result<Self, AmmError> {
        let config = Self {
            owner,
            supported_assets,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] if the document is malformed, has
    ///   unknown keys or carries an invalid address.
    /// - [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self =
            toml::from_str(source).map_err(|err| AmmError::ConfigParse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if an asset is listed
    /// twice.
    pub fn validate(&self) -> Result<(), AmmError> {
        let mut seen = HashSet::with_capacity(self.supported_assets.len());
        if !self.supported_assets.iter().all(|asset| seen.insert(asset)) {
            return Err(AmmError::InvalidConfiguration(
                "supported asset listed more than once",
            ));
        }
        Ok(())
    }

    /// Administrator of the supported-asset set.
    #[must_use]
    pub const fn owner(&self) -> Actor {
        self.owner
    }

    /// Initially supported assets, in declaration order.
    #[must_use]
    pub fn supported_assets(&self) -> &[AssetId] {
        &self.supported_assets
    }

    /// Builds the whitelist this configuration describes.
    #[must_use]
    pub fn build_registry(&self) -> AssetWhitelist {
        AssetWhitelist::with_assets(self.owner, self.supported_assets.iter().copied())
    }
}
