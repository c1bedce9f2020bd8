//! Unified error types for the pairpool ledger.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error is terminal for the operation that raised it:
//! nothing is retried internally and no partial state survives a failure.

use thiserror::Error;

use crate::domain::{Amount, AssetId, Shares};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Failure reported by an [`AssetCustody`](crate::traits::AssetCustody)
/// collaborator.
///
/// The ledger never interprets the reason; it is carried verbatim inside
/// [`AmmError::TransferFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransferError {
    reason: String,
}

impl TransferError {
    /// Creates a transfer error with a free-form reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the collaborator's reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Every way a ledger operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Both sides of an operation name the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// A pool key cannot be derived from two equal identifiers.
    #[error("invalid pair: a pool key needs two distinct assets")]
    InvalidPair,

    /// A zero or otherwise unusable amount was supplied.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The asset is not in the supported-asset set.
    #[error("unsupported asset {0}")]
    UnsupportedAsset(AssetId),

    /// The pool is already seeded.
    #[error("pool already exists")]
    PoolExists,

    /// The pool has never been seeded or has been fully drained.
    #[error("pool not found")]
    PoolNotFound,

    /// Reserves cannot satisfy the request.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The executed price is worse than the caller's bound.
    #[error("slippage exceeded: limit {limit}, actual {actual}")]
    SlippageExceeded {
        /// Caller-supplied bound (minimum output or maximum input).
        limit: Amount,
        /// Amount the pricing formula produced.
        actual: Amount,
    },

    /// The seed deposit is too small to produce a whole share.
    #[error("seed deposit yields zero shares")]
    ZeroShares,

    /// The deposit is too small relative to reserves to mint a share.
    #[error("deposit mints zero shares")]
    ZeroSharesMinted,

    /// The participant holds fewer shares than requested.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to debit.
        requested: Shares,
        /// Shares actually held.
        available: Shares,
    },

    /// An external transfer failed.
    #[error("transfer failed: {0}")]
    TransferFailed(TransferError),

    /// An intermediate value exceeded 128 bits.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A staged pool state broke a ledger invariant and was not committed.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// The caller is not allowed to perform an administrative action.
    #[error("unauthorized")]
    Unauthorized,

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl From<TransferError> for AmmError {
    fn from(err: TransferError) -> Self {
        Self::TransferFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_error_is_wrapped_verbatim() {
        let err: AmmError = TransferError::new("balance too low").into();
        assert_eq!(
            err,
            AmmError::TransferFailed(TransferError::new("balance too low"))
        );
        assert_eq!(err.to_string(), "transfer failed: balance too low");
    }

    #[test]
    fn slippage_display_names_both_amounts() {
        let err = AmmError::SlippageExceeded {
            limit: Amount::new(400),
            actual: Amount::new(362),
        };
        assert_eq!(err.to_string(), "slippage exceeded: limit 400, actual 362");
    }

    #[test]
    fn insufficient_shares_display() {
        let err = AmmError::InsufficientShares {
            requested: Shares::new(5),
            available: Shares::new(3),
        };
        assert_eq!(
            err.to_string(),
            "insufficient shares: requested 5, available 3"
        );
    }
}
