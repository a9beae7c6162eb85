//! UI screens.

mod app;
mod booking_screen;
mod help_popup;
mod home_screen;
mod profile_screen;
mod screen_action;
mod tracking_screen;
pub mod utils;
mod wallet_screen;

pub use app::App;
pub use booking_screen::{BookingFocus, BookingScreen, BookingScreenState};
pub use help_popup::HelpPopup;
pub use home_screen::{HomeScreen, HomeScreenState};
pub use profile_screen::{ProfileFocus, ProfileScreen, ProfileScreenState};
pub use screen_action::ScreenAction;
pub use tracking_screen::{TrackingScreen, TrackingScreenState};
pub use wallet_screen::{FundFocus, WalletPane, WalletScreen, WalletScreenState};
