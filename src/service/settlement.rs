//! Journal of the transfers an operation has completed.

use tracing::error;

use crate::domain::{Actor, Amount, AssetId};
use crate::error::AmmError;
use crate::traits::AssetCustody;

#[derive(Debug, Clone, Copy)]
enum Leg {
    Collected { asset: AssetId, amount: Amount },
    Disbursed { asset: AssetId, amount: Amount },
}

/// Executes an operation's transfers against one participant and records
/// each completed leg so a later failure can reverse them.
///
/// Zero-amount legs are skipped; nothing moves for them.
pub(crate) struct Settlement<'c, C: AssetCustody> {
    custody: &'c mut C,
    actor: Actor,
    legs: Vec<Leg>,
}

impl<'c, C: AssetCustody> Settlement<'c, C> {
    pub(crate) fn new(custody: &'c mut C, actor: Actor) -> Self {
        Self {
            custody,
            actor,
            legs: Vec::with_capacity(2),
        }
    }

    /// Pulls `amount` of `asset` from the participant.
    pub(crate) fn collect(&mut self, asset: AssetId, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.custody.transfer_in(asset, self.actor, amount)?;
        self.legs.push(Leg::Collected { asset, amount });
        Ok(())
    }

    /// Pays `amount` of `asset` to the participant.
    pub(crate) fn disburse(&mut self, asset: AssetId, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.custody.transfer_out(asset, self.actor, amount)?;
        self.legs.push(Leg::Disbursed { asset, amount });
        Ok(())
    }

    /// Reverses every completed leg, most recent first.
    ///
    /// A reversal that fails is logged and skipped; the caller reports the
    /// error that triggered the unwind.
    pub(crate) fn unwind(mut self) {
        let actor = self.actor;
        for leg in std::mem::take(&mut self.legs).into_iter().rev() {
            let result = match leg {
                Leg::Collected { asset, amount } => self.custody.transfer_out(asset, actor, amount),
                Leg::Disbursed { asset, amount } => self.custody.transfer_in(asset, actor, amount),
            };
            if let Err(err) = result {
                error!(actor = %actor, leg = ?leg, reason = %err, "failed to unwind transfer");
            }
        }
    }
}
