use std::str::FromStr;

/// Screens reachable in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Booking,
    Tracking,
    Wallet,
    Profile,
}

impl Screen {
    /// Screens shown in the bottom tab bar, in order.
    pub const TABS: [Self; 4] = [Self::Home, Self::Booking, Self::Wallet, Self::Profile];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Booking => "booking",
            Self::Tracking => "tracking",
            Self::Wallet => "wallet",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Booking => "Book Service",
            Self::Tracking => "Track Order",
            Self::Wallet => "My Wallet",
            Self::Profile => "Profile",
        }
    }

    /// Label used in the tab bar.
    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::Home | Self::Tracking => "Home",
            Self::Booking => "Book",
            Self::Wallet => "Wallet",
            Self::Profile => "Profile",
        }
    }

    /// Position in [`Self::TABS`]. Tracking has no tab and sits with Home.
    #[must_use]
    pub const fn tab_index(self) -> usize {
        match self {
            Self::Home | Self::Tracking => 0,
            Self::Booking => 1,
            Self::Wallet => 2,
            Self::Profile => 3,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "booking" => Ok(Self::Booking),
            "tracking" => Ok(Self::Tracking),
            "wallet" => Ok(Self::Wallet),
            "profile" => Ok(Self::Profile),
            other => Err(UnknownScreen(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("home", Screen::Home ; "home")]
    #[test_case("booking", Screen::Booking ; "booking")]
    #[test_case("tracking", Screen::Tracking ; "tracking")]
    #[test_case("wallet", Screen::Wallet ; "wallet")]
    #[test_case("profile", Screen::Profile ; "profile")]
    fn test_parse_known_screens(key: &str, expected: Screen) {
        assert_eq!(key.parse::<Screen>(), Ok(expected));
        assert_eq!(expected.key(), key);
    }

    #[test]
    fn test_parse_unknown_screen() {
        assert_eq!(
            "settings".parse::<Screen>(),
            Err(UnknownScreen("settings".to_string()))
        );
    }

    #[test]
    fn test_tab_indices_match_tab_order() {
        for (i, screen) in Screen::TABS.iter().enumerate() {
            assert_eq!(screen.tab_index(), i);
        }
        assert!(!Screen::TABS.contains(&Screen::Tracking));
    }
}
