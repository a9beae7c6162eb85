use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;
use std::collections::HashMap;

/// Maps keys to actions. The first binding registered for an action is the
/// one shown in hints.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        let key = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let chr = |c: char| key(KeyCode::Char(c));

        registry.register(Action::Quit, ctrl('c'));
        registry.register(Action::Quit, chr('q'));
        registry.register(Action::ToggleHelp, chr('?'));
        registry.register(Action::ToggleHelp, key(KeyCode::F(1)));
        registry.register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
        );

        registry.register(Action::NextTab, key(KeyCode::Tab));
        registry.register(
            Action::PreviousTab,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        registry.register(Action::PreviousTab, key(KeyCode::BackTab));
        registry.register(Action::GoHome, chr('1'));
        registry.register(Action::GoBooking, chr('2'));
        registry.register(Action::GoWallet, chr('3'));
        registry.register(Action::GoProfile, chr('4'));
        registry.register(Action::Back, key(KeyCode::Esc));

        registry.register(Action::NavigateUp, key(KeyCode::Up));
        registry.register(Action::NavigateUp, chr('k'));
        registry.register(Action::NavigateDown, key(KeyCode::Down));
        registry.register(Action::NavigateDown, chr('j'));
        registry.register(Action::NavigateLeft, key(KeyCode::Left));
        registry.register(Action::NavigateLeft, chr('h'));
        registry.register(Action::NavigateRight, key(KeyCode::Right));
        registry.register(Action::NavigateRight, chr('l'));
        registry.register(Action::NextSection, chr('J'));
        registry.register(
            Action::NextSection,
            KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT),
        );
        registry.register(Action::PreviousSection, chr('K'));
        registry.register(
            Action::PreviousSection,
            KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT),
        );
        registry.register(Action::Select, key(KeyCode::Enter));
        registry.register(Action::Select, chr(' '));
        registry.register(Action::Select, chr('v'));

        registry.register(Action::NewOrder, chr('n'));
        registry.register(Action::TrackOrder, chr('t'));

        registry.register(Action::IncreaseQuantity, chr('+'));
        registry.register(Action::IncreaseQuantity, chr('='));
        registry.register(
            Action::IncreaseQuantity,
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
        );
        registry.register(Action::DecreaseQuantity, chr('-'));
        registry.register(Action::EditInstructions, chr('i'));
        registry.register(Action::BookNow, chr('b'));

        registry.register(Action::CallRider, chr('c'));
        registry.register(Action::MessageRider, chr('m'));
        registry.register(Action::CancelOrder, chr('x'));

        registry.register(Action::FundWallet, chr('f'));
        registry.register(Action::NextPane, chr(']'));
        registry.register(Action::PreviousPane, chr('['));

        registry.register(Action::Logout, ctrl('d'));

        registry
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, action: Action, key: KeyEvent) {
        self.display_bindings.entry(action).or_insert(key);
        self.input_bindings.push((key, action));
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Hint for `action` using its display key.
    #[must_use]
    pub fn keybind(&self, action: Action, label: impl Into<Cow<'static, str>>) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

/// Screens that contribute key hints to the footer.
pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit ; "ctrl_c")]
    #[test_case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit ; "q")]
    #[test_case(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE), Action::NextTab ; "tab")]
    #[test_case(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), Action::PreviousTab ; "shift_tab")]
    #[test_case(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT), Action::IncreaseQuantity ; "shift_plus")]
    #[test_case(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE), Action::DecreaseQuantity ; "minus")]
    #[test_case(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), Action::Select ; "space")]
    #[test_case(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE), Action::GoWallet ; "digit")]
    fn test_find_action(key: KeyEvent, expected: Action) {
        assert_eq!(CommandRegistry::new().find_action(key), Some(expected));
    }

    #[test]
    fn test_unbound_key() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_first_registration_is_display_key() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.get(Action::Quit),
            Some(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        let hint = registry.keybind(Action::FundWallet, "Fund").unwrap();
        assert_eq!(hint.key.code, KeyCode::Char('f'));
        assert!(hint.visible_in_bar);
    }
}
