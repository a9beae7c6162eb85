//! Wallet error types.

use thiserror::Error;

/// Wallet funding error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("choose a payment method")]
    NoPaymentMethod,
}
