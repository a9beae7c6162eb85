//! Domain layer with booking entities, errors and the catalog port.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Toast notifications.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Screen identifiers.
pub mod screen;

pub use entities::{OrderDraft, Service, ServiceId};
pub use errors::{OrderError, WalletError};
pub use notification::{Toast, ToastLevel};
pub use ports::CatalogPort;
pub use screen::Screen;
