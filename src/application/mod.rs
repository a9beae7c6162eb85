//! Application layer with the booking, wallet and navigation state.

/// Stateful services driven by the screens.
pub mod services;

pub use services::{OrderConfigurator, ScreenRouter, ToastQueue, WalletService};
