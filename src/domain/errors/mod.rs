//! Domain error types.

mod order_error;
mod wallet_error;

pub use order_error::OrderError;
pub use wallet_error::WalletError;
