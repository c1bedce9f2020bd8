//! Administration of the supported-asset set.
//!
//! The pricing core only ever asks [`AssetRegistry::is_supported`]; who may
//! change the answer is decided here, before any call reaches the service.
//!
//! [`AssetRegistry::is_supported`]: crate::traits::AssetRegistry::is_supported

mod whitelist;

pub use whitelist::AssetWhitelist;
