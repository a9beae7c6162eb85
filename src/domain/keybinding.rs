use crossterm::event::KeyEvent;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleHelp,

    // Tabs
    NextTab,
    PreviousTab,
    GoHome,
    GoBooking,
    GoWallet,
    GoProfile,
    Back,

    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    NextSection,
    PreviousSection,
    Select,

    // Home
    NewOrder,
    TrackOrder,

    // Booking
    IncreaseQuantity,
    DecreaseQuantity,
    EditInstructions,
    BookNow,

    // Tracking
    CallRider,
    MessageRider,
    CancelOrder,

    // Wallet
    FundWallet,
    NextPane,
    PreviousPane,

    // Profile
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
