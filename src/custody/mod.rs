//! Reference [`AssetCustody`](crate::traits::AssetCustody) implementations.

mod memory;

pub use memory::MemoryCustody;
