//! Asset custody collaborator.
//!
//! The ledger never moves assets itself. [`AssetCustody`] is the seam
//! through which the service asks the host environment to pull assets from
//! a participant into the ledger's custody and to push them back out.
//!
//! # Ordering Contract
//!
//! The service calls `transfer_in` for every input before it commits any
//! ledger change, and calls `transfer_out` only after the ledger holds its
//! final, invariant-satisfying state. An implementation that observes the
//! ledger from inside a transfer therefore only ever sees settled state.

use crate::domain::{Actor, Amount, AssetId};
use crate::error::TransferError;

/// Moves assets between participants and the ledger's custody.
///
/// Implementations must be all-or-nothing per call: a returned error means
/// nothing moved.
pub trait AssetCustody {
    /// Pulls `amount` of `asset` from `from` into custody.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer cannot be executed.
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: Actor,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Pushes `amount` of `asset` from custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer cannot be executed.
    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: Actor,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

impl<C: AssetCustody + ?Sized> AssetCustody for &mut C {
    fn transfer_in(
        &mut self,
        asset: AssetId,
        from: Actor,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer_in(asset, from, amount)
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: Actor,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer_out(asset, to, amount)
    }
}
