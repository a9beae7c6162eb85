use crate::domain::entities::ConfirmedOrder;
use crate::domain::{Screen, Toast};

/// Outcome of a screen handling an action or key.
#[derive(Debug, Clone)]
pub enum ScreenAction {
    /// Nothing for the shell to do.
    None,
    Navigate(Screen),
    Toast(Toast),
    /// A booking was confirmed; the shell records it and shows tracking.
    Booked(Box<ConfirmedOrder>),
}

impl ScreenAction {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
