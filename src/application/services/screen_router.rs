//! Current-screen holder.

use tracing::{debug, warn};

use crate::domain::Screen;

/// Tracks which screen is active. No history is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenRouter {
    current: Screen,
}

impl ScreenRouter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Screen::Home,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Switches to `screen` unconditionally.
    pub fn navigate(&mut self, screen: Screen) {
        if screen != self.current {
            debug!(from = %self.current, to = %screen, "Navigate");
        }
        self.current = screen;
    }

    /// Navigates by key; unrecognised keys land on home.
    pub fn navigate_to(&mut self, key: &str) {
        let screen = key.parse().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to home screen");
            Screen::Home
        });
        self.navigate(screen);
    }

    /// Moves to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        let index = (self.current.tab_index() + 1) % Screen::TABS.len();
        self.navigate(Screen::TABS[index]);
    }

    /// Moves to the previous tab, wrapping around.
    pub fn previous_tab(&mut self) {
        let len = Screen::TABS.len();
        let index = (self.current.tab_index() + len - 1) % len;
        self.navigate(Screen::TABS[index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(ScreenRouter::new().current(), Screen::Home);
        assert_eq!(ScreenRouter::default().current(), Screen::Home);
    }

    #[test]
    fn test_navigate_overwrites() {
        let mut router = ScreenRouter::new();
        router.navigate(Screen::Tracking);
        router.navigate(Screen::Wallet);
        assert_eq!(router.current(), Screen::Wallet);
    }

    #[test_case("booking", Screen::Booking ; "known")]
    #[test_case("tracking", Screen::Tracking ; "tracking_by_key")]
    #[test_case("orders", Screen::Home ; "unknown_falls_back")]
    #[test_case("", Screen::Home ; "empty_falls_back")]
    fn test_navigate_to(key: &str, expected: Screen) {
        let mut router = ScreenRouter::new();
        router.navigate(Screen::Profile);
        router.navigate_to(key);
        assert_eq!(router.current(), expected);
    }

    #[test_case(Screen::Home, Screen::Booking ; "home_to_booking")]
    #[test_case(Screen::Wallet, Screen::Profile ; "wallet_to_profile")]
    #[test_case(Screen::Profile, Screen::Home ; "wraps")]
    #[test_case(Screen::Tracking, Screen::Booking ; "tracking_counts_as_home")]
    fn test_next_tab(start: Screen, expected: Screen) {
        let mut router = ScreenRouter::new();
        router.navigate(start);
        router.next_tab();
        assert_eq!(router.current(), expected);
    }

    #[test_case(Screen::Home, Screen::Profile ; "wraps")]
    #[test_case(Screen::Booking, Screen::Home ; "booking_to_home")]
    #[test_case(Screen::Tracking, Screen::Profile ; "tracking_counts_as_home")]
    fn test_previous_tab(start: Screen, expected: Screen) {
        let mut router = ScreenRouter::new();
        router.navigate(start);
        router.previous_tab();
        assert_eq!(router.current(), expected);
    }
}
