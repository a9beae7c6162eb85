//! Application services.

pub mod order_configurator;
pub mod screen_router;
pub mod toast_queue;
pub mod wallet_service;

pub use order_configurator::OrderConfigurator;
pub use screen_router::ScreenRouter;
pub use toast_queue::ToastQueue;
pub use wallet_service::WalletService;
