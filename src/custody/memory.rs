//! In-memory custody backed by hash maps.

use std::collections::HashMap;

use crate::domain::{Actor, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::AssetCustody;

/// Participant balances plus a vault holding everything the ledger has
/// taken into custody.
///
/// Every transfer is all-or-nothing: balances are checked and computed
/// before either side is written.
///
/// # Examples
///
/// ```
/// use pairpool::custody::MemoryCustody;
/// use pairpool::domain::{Actor, Amount, AssetId};
/// use pairpool::traits::AssetCustody;
///
/// let alice = Actor::from_bytes([1; 20]);
/// let usdc = AssetId::from_bytes([0xAA; 20]);
///
/// let mut custody = MemoryCustody::new();
/// custody.mint(usdc, alice, Amount::new(500)).expect("fresh balance");
/// custody.transfer_in(usdc, alice, Amount::new(200)).expect("funded");
/// assert_eq!(custody.balance_of(usdc, alice), Amount::new(300));
/// assert_eq!(custody.vault_balance(usdc), Amount::new(200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCustody {
    balances: HashMap<(AssetId, Actor), Amount>,
    vault: HashMap<AssetId, Amount>,
}

impl MemoryCustody {
    /// Creates custody with no balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `holder` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the balance would overflow.
    pub fn mint(&mut self, asset: AssetId, holder: Actor, amount: Amount) -> Result<(), TransferError> {
        let balance = self
            .balance_of(asset, holder)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::new("balance overflow"))?;
        self.balances.insert((asset, holder), balance);
        Ok(())
    }

    /// Balance of `asset` held by `holder`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, holder: Actor) -> Amount {
        self.balances
            .get(&(asset, holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Amount of `asset` held in custody.
    #[must_use]
    pub fn vault_balance(&self, asset: AssetId) -> Amount {
        self.vault.get(&asset).copied().unwrap_or(Amount::ZERO)
    }
}

impl AssetCustody for MemoryCustody {
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: Actor,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let balance = self
            .balance_of(asset, from)
            .checked_sub(&amount)
            .ok_or_else(|| TransferError::new(format!("{from} holds too little of {asset}")))?;
        let vault = self
            .vault_balance(asset)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::new("vault overflow"))?;
        self.balances.insert((asset, from), balance);
        self.vault.insert(asset, vault);
        Ok(())
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: Actor,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let vault = self
            .vault_balance(asset)
            .checked_sub(&amount)
            .ok_or_else(|| TransferError::new(format!("vault holds too little of {asset}")))?;
        let balance = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::new("balance overflow"))?;
        self.vault.insert(asset, vault);
        self.balances.insert((asset, to), balance);
        Ok(())
    }
}
