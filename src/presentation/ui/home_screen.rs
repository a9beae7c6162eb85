//! Home screen: greeting, quick actions, active orders and services.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::{ActiveOrder, ConfirmedOrder};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Screen};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::ui::utils::{greeting, panel};

const UNREAD_ALERTS: u32 = 2;

pub struct HomeScreenState {
    catalog: Arc<dyn CatalogPort>,
    orders: Vec<ActiveOrder>,
    list_state: ListState,
    hour: u32,
}

impl HomeScreenState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        let orders = catalog.active_orders().to_vec();
        let mut list_state = ListState::default();
        if !orders.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            catalog,
            orders,
            list_state,
            hour: 9,
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[ActiveOrder] {
        &self.orders
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Local hour used to pick the greeting.
    pub fn set_hour(&mut self, hour: u32) {
        self.hour = hour;
    }

    /// Puts a freshly booked order at the top of the list.
    pub fn add_order(&mut self, order: &ConfirmedOrder) {
        self.orders.insert(0, ActiveOrder::from_confirmed(order));
        self.list_state.select(Some(0));
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::NewOrder => ScreenAction::Navigate(Screen::Booking),
            Action::TrackOrder => ScreenAction::Navigate(Screen::Tracking),
            Action::Select if self.list_state.selected().is_some() => {
                ScreenAction::Navigate(Screen::Tracking)
            }
            Action::NavigateDown => {
                self.step(1);
                ScreenAction::None
            }
            Action::NavigateUp => {
                self.step(-1);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    fn step(&mut self, delta: isize) {
        let len = self.orders.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
    }
}

impl HasCommands for HomeScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            (Action::NewOrder, "New Order"),
            (Action::TrackOrder, "Track Order"),
            (Action::Select, "View"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(action, label))
        .collect()
    }
}

pub struct HomeScreen<'a> {
    theme: &'a Theme,
}

impl<'a> HomeScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_header(&self, state: &HomeScreenState, area: Rect, buf: &mut Buffer) {
        let profile = state.catalog.profile();
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(greeting(state.hour), self.theme.title_style)),
            Line::from(Span::styled(
                profile.short_name.as_str(),
                self.theme.dimmed_style,
            )),
            Line::from(vec![
                Span::raw("📍 "),
                Span::styled(profile.location.as_str(), self.theme.dimmed_style),
            ]),
        ])
        .render(left, buf);

        Paragraph::new(Line::from(vec![
            Span::raw("🔔"),
            Span::styled(format!(" {UNREAD_ALERTS} "), self.theme.badge_style),
        ]))
        .right_aligned()
        .render(right, buf);
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        let [new_order, track] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        Paragraph::new(Line::from(" ＋ New Order [n]").centered())
            .style(self.theme.active_tab_style)
            .block(panel("", self.theme, true))
            .render(new_order, buf);
        Paragraph::new(Line::from("🚚 Track Order [t]").centered())
            .style(Style::default().fg(self.theme.accent_text))
            .block(panel("", self.theme, true))
            .render(track, buf);
    }

    fn render_orders(&self, state: &mut HomeScreenState, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = state
            .orders
            .iter()
            .map(|order| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("#{}", order.id), self.theme.title_style),
                        Span::raw("  "),
                        Span::styled(
                            format!(" {} ", order.status.label()),
                            self.theme.selection_style,
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "{} • {} items • ⏱ {}",
                            order.service, order.items, order.estimated_time
                        ),
                        self.theme.dimmed_style,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(panel("Active Orders", self.theme, true))
            .highlight_symbol("▌")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }

    fn render_services(&self, state: &HomeScreenState, area: Rect, buf: &mut Buffer) {
        let block = panel("Our Services", self.theme, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let services = state.catalog.services();
        let count = u32::try_from(services.len()).unwrap_or(1).max(1);
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count); services.len()]).split(inner);
        for (service, column) in services.iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(service.icon.as_str()).centered(),
                Line::from(Span::styled(service.name.as_str(), self.theme.title_style)).centered(),
                Line::from(Span::styled(service.price_label(), self.theme.dimmed_style)).centered(),
            ])
            .render(*column, buf);
        }
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Save 20% with Monthly Plan",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Get unlimited washes • see Wallet › Subscriptions"),
        ])
        .style(self.theme.active_tab_style)
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

impl StatefulWidget for HomeScreen<'_> {
    type State = HomeScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, actions, orders, services, banner] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .areas(area);

        self.render_header(state, header, buf);
        self.render_quick_actions(actions, buf);
        self.render_orders(state, orders, buf);
        self.render_services(state, services, buf);
        self.render_banner(banner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BillingUnit, PickupDate, Service, TimeSlot};
    use crate::infrastructure::StaticCatalog;

    fn state() -> HomeScreenState {
        HomeScreenState::new(Arc::new(StaticCatalog::new()))
    }

    #[test]
    fn test_quick_actions_navigate() {
        let mut home = state();
        assert!(matches!(
            home.handle_action(Action::NewOrder),
            ScreenAction::Navigate(Screen::Booking)
        ));
        assert!(matches!(
            home.handle_action(Action::TrackOrder),
            ScreenAction::Navigate(Screen::Tracking)
        ));
        assert!(matches!(
            home.handle_action(Action::Select),
            ScreenAction::Navigate(Screen::Tracking)
        ));
    }

    #[test]
    fn test_order_selection_is_clamped() {
        let mut home = state();
        assert_eq!(home.selected(), Some(0));
        home.handle_action(Action::NavigateDown);
        home.handle_action(Action::NavigateDown);
        assert_eq!(home.selected(), Some(1));
        home.handle_action(Action::NavigateUp);
        home.handle_action(Action::NavigateUp);
        assert_eq!(home.selected(), Some(0));
    }

    #[test]
    fn test_booked_order_listed_first() {
        let mut home = state();
        let order = ConfirmedOrder {
            reference: "ZW003".to_string(),
            service: Service::new("express", "Express Service", 1000, BillingUnit::Kg, "⚡", ""),
            quantity: 2,
            pickup_date: PickupDate::new("Tomorrow"),
            time_slot: TimeSlot::new("2:00 PM - 4:00 PM"),
            instructions: None,
            subtotal: 2000,
            total: 2100,
        };

        home.add_order(&order);

        assert_eq!(home.orders().len(), 3);
        assert_eq!(home.orders()[0].id, "ZW003");
        assert_eq!(home.orders()[0].estimated_time, "Tomorrow, 2:00 PM - 4:00 PM");
    }

    #[test]
    fn test_render_shows_orders_and_services() {
        let theme = Theme::default();
        let mut home = state();
        let area = Rect::new(0, 0, 90, 24);
        let mut buf = Buffer::empty(area);

        HomeScreen::new(&theme).render(area, &mut buf, &mut home);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Good Morning!"));
        assert!(text.contains("#ZW001"));
        assert!(text.contains("Out for Delivery"));
        assert!(text.contains("₦500/kg"));
    }
}
