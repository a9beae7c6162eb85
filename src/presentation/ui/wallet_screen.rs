//! Wallet: balance, fund form, transactions and subscription plans.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tracing::warn;

use crate::application::WalletService;
use crate::domain::entities::TransactionKind;
use crate::domain::errors::WalletError;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Screen, Toast};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::ui::utils::{cursor_marker, naira, naira_grouped, panel};
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletPane {
    #[default]
    Transactions,
    Subscriptions,
}

impl WalletPane {
    const fn toggle(self) -> Self {
        match self {
            Self::Transactions => Self::Subscriptions,
            Self::Subscriptions => Self::Transactions,
        }
    }
}

/// Focusable element of the fund form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundFocus {
    Amount,
    Quick(usize),
    Method(usize),
    Cancel,
    Submit,
}

pub struct WalletScreenState {
    catalog: Arc<dyn CatalogPort>,
    wallet: WalletService,
    pane: WalletPane,
    fund_open: bool,
    focus: FundFocus,
    amount: TextInput,
    method: Option<usize>,
    plan_cursor: usize,
    date_label: String,
}

impl WalletScreenState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        let wallet = WalletService::new(catalog.as_ref());
        Self {
            catalog,
            wallet,
            pane: WalletPane::default(),
            fund_open: false,
            focus: FundFocus::Amount,
            amount: TextInput::new(" Amount ").numeric().placeholder("Enter amount"),
            method: None,
            plan_cursor: 0,
            date_label: "Today".to_string(),
        }
    }

    #[must_use]
    pub const fn wallet(&self) -> &WalletService {
        &self.wallet
    }

    #[must_use]
    pub const fn pane(&self) -> WalletPane {
        self.pane
    }

    #[must_use]
    pub const fn is_fund_open(&self) -> bool {
        self.fund_open
    }

    #[must_use]
    pub const fn focus(&self) -> FundFocus {
        self.focus
    }

    #[must_use]
    pub fn amount(&self) -> &str {
        self.amount.value()
    }

    /// Label stamped on new top-ups, e.g. `Today, 3:05 PM`.
    pub fn set_date_label(&mut self, label: impl Into<String>) {
        self.date_label = label.into();
    }

    /// True while digits go to the amount field.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.fund_open && self.focus == FundFocus::Amount
    }

    fn open_fund_form(&mut self) {
        self.fund_open = true;
        self.set_focus(FundFocus::Amount);
    }

    fn close_fund_form(&mut self) {
        self.fund_open = false;
        self.amount.clear();
        self.method = None;
        self.set_focus(FundFocus::Amount);
    }

    fn set_focus(&mut self, focus: FundFocus) {
        self.focus = focus;
        self.amount.set_focused(self.fund_open && focus == FundFocus::Amount);
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::FundWallet if self.fund_open => {
                self.close_fund_form();
                ScreenAction::None
            }
            Action::FundWallet => {
                self.open_fund_form();
                ScreenAction::None
            }
            Action::Back if self.fund_open => {
                self.close_fund_form();
                ScreenAction::None
            }
            Action::Back => ScreenAction::Navigate(Screen::Home),
            Action::NextPane | Action::PreviousPane => {
                self.pane = self.pane.toggle();
                ScreenAction::None
            }
            _ if self.fund_open => self.handle_form_action(action),
            Action::NavigateDown if self.pane == WalletPane::Subscriptions => {
                let last = self.catalog.subscription_plans().len().saturating_sub(1);
                self.plan_cursor = (self.plan_cursor + 1).min(last);
                ScreenAction::None
            }
            Action::NavigateUp if self.pane == WalletPane::Subscriptions => {
                self.plan_cursor = self.plan_cursor.saturating_sub(1);
                ScreenAction::None
            }
            Action::Select if self.pane == WalletPane::Subscriptions => {
                self.catalog
                    .subscription_plans()
                    .get(self.plan_cursor)
                    .map_or(ScreenAction::None, |plan| {
                        ScreenAction::Toast(Toast::info(
                            "Subscriptions",
                            format!("{} at {} is coming soon", plan.name, naira(plan.price)),
                        ))
                    })
            }
            _ => ScreenAction::None,
        }
    }

    fn handle_form_action(&mut self, action: Action) -> ScreenAction {
        let quick = self.catalog.quick_fund_amounts().len();
        let methods = self.catalog.payment_methods().len();
        let next = match (action, self.focus) {
            (Action::NavigateDown, FundFocus::Amount) => FundFocus::Quick(0),
            (Action::NavigateDown, FundFocus::Quick(_)) => FundFocus::Method(0),
            (Action::NavigateDown, FundFocus::Method(i)) if i + 1 < methods => {
                FundFocus::Method(i + 1)
            }
            (Action::NavigateDown, FundFocus::Method(_)) => FundFocus::Submit,
            (Action::NavigateUp, FundFocus::Quick(_)) => FundFocus::Amount,
            (Action::NavigateUp, FundFocus::Method(0)) => FundFocus::Quick(0),
            (Action::NavigateUp, FundFocus::Method(i)) => FundFocus::Method(i - 1),
            (Action::NavigateUp, FundFocus::Cancel | FundFocus::Submit) => {
                FundFocus::Method(methods.saturating_sub(1))
            }
            (Action::NavigateLeft, FundFocus::Quick(i)) => FundFocus::Quick(i.saturating_sub(1)),
            (Action::NavigateRight, FundFocus::Quick(i)) => {
                FundFocus::Quick((i + 1).min(quick.saturating_sub(1)))
            }
            (Action::NavigateLeft, FundFocus::Submit) => FundFocus::Cancel,
            (Action::NavigateRight, FundFocus::Cancel) => FundFocus::Submit,
            (Action::Select, focus) => return self.activate(focus),
            (_, focus) => focus,
        };
        self.set_focus(next);
        ScreenAction::None
    }

    fn activate(&mut self, focus: FundFocus) -> ScreenAction {
        match focus {
            FundFocus::Amount => {
                self.set_focus(FundFocus::Quick(0));
                ScreenAction::None
            }
            FundFocus::Quick(i) => {
                if let Some(amount) = self.catalog.quick_fund_amounts().get(i) {
                    self.amount.set_value(amount.to_string());
                }
                ScreenAction::None
            }
            FundFocus::Method(i) => {
                self.method = Some(i);
                ScreenAction::None
            }
            FundFocus::Cancel => {
                self.close_fund_form();
                ScreenAction::None
            }
            FundFocus::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> ScreenAction {
        match self.try_fund() {
            Ok(toast) => {
                self.close_fund_form();
                ScreenAction::Toast(toast)
            }
            Err(e) => {
                warn!(error = %e, "Wallet top-up rejected");
                ScreenAction::Toast(Toast::error("Fund Wallet", e.to_string()))
            }
        }
    }

    fn try_fund(&mut self) -> Result<Toast, WalletError> {
        let amount = WalletService::parse_amount(self.amount.value())?;
        let method = self
            .method
            .and_then(|i| self.catalog.payment_methods().get(i))
            .ok_or(WalletError::NoPaymentMethod)?;
        let transaction = self.wallet.fund(amount, method, self.date_label.clone())?;
        Ok(Toast::success(
            "Wallet funded",
            format!("{} added via {}", naira(transaction.amount), method.name),
        ))
    }

    /// Feeds a key to the amount field while it has focus.
    ///
    /// Returns `None` when the key should be resolved through the command
    /// registry instead.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        if !self.is_editing() {
            return None;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        if EventHandler::is_submit_event(&key) {
            return Some(self.submit());
        }
        match key.code {
            KeyCode::Esc => {
                self.close_fund_form();
                Some(ScreenAction::None)
            }
            KeyCode::Down => {
                self.set_focus(FundFocus::Quick(0));
                Some(ScreenAction::None)
            }
            // Letters never reach the registry while typing an amount.
            KeyCode::Char(_) => {
                self.amount.handle_key(key);
                Some(ScreenAction::None)
            }
            _ => self.amount.handle_key(key).then_some(ScreenAction::None),
        }
    }
}

impl HasCommands for WalletScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let actions: &[(Action, &'static str)] = if self.fund_open {
            &[
                (Action::Select, "Choose"),
                (Action::FundWallet, "Close"),
                (Action::Back, "Cancel"),
            ]
        } else {
            &[
                (Action::FundWallet, "Fund Wallet"),
                (Action::NextPane, "Next Tab"),
                (Action::PreviousPane, "Prev Tab"),
                (Action::Back, "Back"),
            ]
        };
        actions
            .iter()
            .filter_map(|(action, label)| registry.keybind(*action, *label))
            .collect()
    }
}

pub struct WalletScreen<'a> {
    theme: &'a Theme,
}

impl<'a> WalletScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_balance(&self, state: &WalletScreenState, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from("Available Balance").centered(),
            Line::from(Span::styled(
                naira_grouped(state.wallet.balance()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from("[f] ＋ Fund Wallet").centered(),
        ])
        .style(self.theme.active_tab_style)
        .render(area, buf);
    }

    fn focus_style(&self, focused: bool) -> Style {
        if focused {
            self.theme.selection_style
        } else {
            self.theme.base_style
        }
    }

    fn render_fund_form(&self, state: &WalletScreenState, area: Rect, buf: &mut Buffer) {
        let block = panel("Fund Wallet", self.theme, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let methods = state.catalog.payment_methods();
        let [amount_area, quick_area, label_area, methods_area, buttons_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(u16::try_from(methods.len()).unwrap_or(3)),
                Constraint::Length(1),
            ])
            .areas(inner);

        state.amount.render(amount_area, buf);

        let quick: Vec<Span> = state
            .catalog
            .quick_fund_amounts()
            .iter()
            .enumerate()
            .flat_map(|(i, amount)| {
                [
                    Span::styled(
                        format!(" {} ", naira(*amount)),
                        self.focus_style(state.focus == FundFocus::Quick(i)),
                    ),
                    Span::raw("  "),
                ]
            })
            .collect();
        Paragraph::new(Line::from(quick)).render(quick_area, buf);

        Paragraph::new(Span::styled("Select Payment Method", self.theme.title_style))
            .render(label_area, buf);

        let method_lines: Vec<Line> = methods
            .iter()
            .enumerate()
            .map(|(i, method)| {
                let focused = state.focus == FundFocus::Method(i);
                Line::from(vec![
                    Span::raw(cursor_marker(focused)),
                    Span::raw(if state.method == Some(i) { "● " } else { "○ " }),
                    Span::styled(method.name.as_str(), self.focus_style(focused)),
                    Span::styled(format!("  {}", method.description), self.theme.dimmed_style),
                ])
            })
            .collect();
        Paragraph::new(method_lines).render(methods_area, buf);

        let can_submit = !state.amount.value().is_empty();
        let submit_style = if can_submit {
            self.focus_style(state.focus == FundFocus::Submit)
        } else {
            self.theme.dimmed_style
        };
        Paragraph::new(Line::from(vec![
            Span::styled(" Cancel ", self.focus_style(state.focus == FundFocus::Cancel)),
            Span::raw("   "),
            Span::styled(" Fund Wallet ", submit_style),
        ]))
        .render(buttons_area, buf);
    }

    fn render_pane_tabs(&self, state: &WalletScreenState, area: Rect, buf: &mut Buffer) {
        let tab = |pane: WalletPane, label: &'static str| {
            let style = if state.pane == pane {
                self.theme.active_tab_style
            } else {
                self.theme.dimmed_style
            };
            Span::styled(format!(" {label} "), style)
        };
        Paragraph::new(Line::from(vec![
            tab(WalletPane::Transactions, "Transactions"),
            Span::raw(" "),
            tab(WalletPane::Subscriptions, "Subscriptions"),
        ]))
        .render(area, buf);
    }

    fn render_transactions(&self, state: &WalletScreenState, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = state
            .wallet
            .transactions()
            .iter()
            .flat_map(|tx| {
                let color = match tx.kind {
                    TransactionKind::Credit => self.theme.success,
                    TransactionKind::Debit => self.theme.danger,
                };
                let arrow = match tx.kind {
                    TransactionKind::Credit => "↙",
                    TransactionKind::Debit => "↗",
                };
                [
                    Line::from(vec![
                        Span::styled(format!("{arrow} "), Style::default().fg(color)),
                        Span::styled(tx.description.as_str(), self.theme.title_style),
                        Span::raw("  "),
                        Span::styled(tx.amount_label(), Style::default().fg(color)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} · {}", tx.date, tx.status.label()),
                        self.theme.dimmed_style,
                    )),
                ]
            })
            .collect();
        Paragraph::new(lines)
            .block(panel("Recent Transactions", self.theme, false))
            .render(area, buf);
    }

    fn render_plans(&self, state: &WalletScreenState, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, plan) in state.catalog.subscription_plans().iter().enumerate() {
            let focused = !state.fund_open && i == state.plan_cursor;
            let mut header = vec![
                Span::raw(cursor_marker(focused)),
                Span::styled(plan.name.as_str(), self.focus_style(focused)),
                Span::raw("  "),
                Span::styled(
                    format!("{} per {}", naira(plan.price), plan.period),
                    self.theme.title_style,
                ),
            ];
            if plan.popular {
                header.push(Span::raw(" "));
                header.push(Span::styled(" Popular ", self.theme.badge_style));
            }
            lines.push(Line::from(header));
            lines.extend(plan.features.iter().map(|feature| {
                Line::from(Span::styled(format!("    • {feature}"), self.theme.dimmed_style))
            }));
        }
        Paragraph::new(lines)
            .block(panel("Subscription Plans", self.theme, !state.fund_open))
            .render(area, buf);
    }
}

impl StatefulWidget for WalletScreen<'_> {
    type State = WalletScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let form_height = if state.fund_open {
            u16::try_from(state.catalog.payment_methods().len()).unwrap_or(3) + 8
        } else {
            0
        };
        let [balance, form, tabs, body] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(form_height),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_balance(state, balance, buf);
        if state.fund_open {
            self.render_fund_form(state, form, buf);
        }
        self.render_pane_tabs(state, tabs, buf);
        match state.pane {
            WalletPane::Transactions => self.render_transactions(state, body, buf),
            WalletPane::Subscriptions => self.render_plans(state, body, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastLevel;
    use crate::infrastructure::StaticCatalog;

    fn state() -> WalletScreenState {
        WalletScreenState::new(Arc::new(StaticCatalog::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(wallet: &mut WalletScreenState, text: &str) {
        for c in text.chars() {
            wallet.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn expect_toast(action: ScreenAction) -> Toast {
        let ScreenAction::Toast(toast) = action else {
            panic!("expected a toast");
        };
        toast
    }

    #[test]
    fn test_fund_with_typed_amount() {
        let mut wallet = state();
        wallet.set_date_label("Today, 3:05 PM");
        wallet.handle_action(Action::FundWallet);
        assert!(wallet.is_editing());

        type_text(&mut wallet, "15x00");
        assert_eq!(wallet.amount(), "1500");

        // Down into quick amounts, Down into methods, pick the card.
        wallet.handle_key(key(KeyCode::Down));
        wallet.handle_action(Action::NavigateDown);
        wallet.handle_action(Action::Select);
        wallet.handle_action(Action::NavigateDown);
        wallet.handle_action(Action::NavigateDown);
        wallet.handle_action(Action::NavigateDown);
        assert_eq!(wallet.focus(), FundFocus::Submit);

        let toast = expect_toast(wallet.handle_action(Action::Select));
        assert_eq!(toast.level, ToastLevel::Success);
        assert!(toast.message.contains("Debit/Credit Card"));

        assert_eq!(wallet.wallet().balance(), 4000);
        let latest = &wallet.wallet().transactions()[0];
        assert_eq!(latest.description, "Wallet Top-up");
        assert_eq!(latest.amount, 1500);
        assert_eq!(latest.date, "Today, 3:05 PM");
        assert!(!wallet.is_fund_open());
    }

    #[test]
    fn test_quick_amount_fills_field() {
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);
        wallet.handle_key(key(KeyCode::Down));
        wallet.handle_action(Action::NavigateRight);
        wallet.handle_action(Action::NavigateRight);
        wallet.handle_action(Action::NavigateRight);
        wallet.handle_action(Action::Select);

        assert_eq!(wallet.focus(), FundFocus::Quick(2));
        assert_eq!(wallet.amount(), "5000");
    }

    #[test]
    fn test_empty_amount_rejected() {
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);

        let toast = expect_toast(wallet.handle_key(key(KeyCode::Enter)).unwrap());

        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(wallet.wallet().balance(), 2500);
        assert!(wallet.is_fund_open());
    }

    #[test]
    fn test_missing_payment_method_rejected() {
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);
        type_text(&mut wallet, "1000");

        let toast = expect_toast(wallet.handle_key(key(KeyCode::Enter)).unwrap());

        assert_eq!(toast.message, WalletError::NoPaymentMethod.to_string());
        assert_eq!(wallet.wallet().transactions().len(), 4);
    }

    #[test]
    fn test_letters_are_swallowed_while_typing() {
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);
        assert!(wallet.handle_key(key(KeyCode::Char('q'))).is_some());
        assert!(wallet.handle_key(key(KeyCode::Tab)).is_none());
        assert!(
            wallet
                .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .is_none()
        );
    }

    #[test]
    fn test_back_closes_form_then_leaves() {
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);
        type_text(&mut wallet, "200");

        assert!(wallet.handle_action(Action::Back).is_none());
        assert!(!wallet.is_fund_open());
        assert_eq!(wallet.amount(), "");
        assert!(matches!(
            wallet.handle_action(Action::Back),
            ScreenAction::Navigate(Screen::Home)
        ));
    }

    #[test]
    fn test_panes_toggle_and_subscribe() {
        let mut wallet = state();
        wallet.handle_action(Action::NextPane);
        assert_eq!(wallet.pane(), WalletPane::Subscriptions);

        wallet.handle_action(Action::NavigateDown);
        let toast = expect_toast(wallet.handle_action(Action::Select));
        assert_eq!(toast.level, ToastLevel::Info);
        assert!(toast.message.contains("Premium Plan"));

        wallet.handle_action(Action::PreviousPane);
        assert_eq!(wallet.pane(), WalletPane::Transactions);
    }

    #[test]
    fn test_render_balance_and_history() {
        let theme = Theme::default();
        let mut wallet = state();
        wallet.handle_action(Action::FundWallet);
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);

        WalletScreen::new(&theme).render(area, &mut buf, &mut wallet);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("₦2,500"));
        assert!(text.contains("Select Payment Method"));
        assert!(text.contains("Referral Bonus"));
        assert!(text.contains("+₦200"));
    }
}
