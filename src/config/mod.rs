//! Ledger configuration.
//!
//! [`LedgerConfig`] is the declarative blueprint for a deployment: the
//! administrator of the supported-asset set and its initial contents. It is
//! validated on construction and can be loaded from TOML.

mod ledger_config;

pub use ledger_config::LedgerConfig;
