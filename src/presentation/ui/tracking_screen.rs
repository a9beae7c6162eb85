//! Order tracking: order card, rider card and timeline.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, StatefulWidget, Widget, Wrap},
};
use tracing::info;

use crate::domain::entities::{ConfirmedOrder, StepState, TrackingStep};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Screen, Toast};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::ui::utils::{naira, panel};

pub struct TrackingScreenState {
    catalog: Arc<dyn CatalogPort>,
    latest_booking: Option<ConfirmedOrder>,
}

impl TrackingScreenState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            latest_booking: None,
        }
    }

    /// Shows a banner for a booking confirmed during this session.
    pub fn set_latest_booking(&mut self, order: ConfirmedOrder) {
        self.latest_booking = Some(order);
    }

    #[must_use]
    pub const fn latest_booking(&self) -> Option<&ConfirmedOrder> {
        self.latest_booking.as_ref()
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        let order = self.catalog.tracked_order();
        match action {
            Action::Back => ScreenAction::Navigate(Screen::Home),
            Action::CallRider => {
                info!(rider = %order.rider.name, "Call rider requested");
                ScreenAction::Toast(Toast::info(
                    "Calling rider",
                    format!("{} · {}", order.rider.name, order.rider.phone),
                ))
            }
            Action::MessageRider => ScreenAction::Toast(Toast::info(
                "Message rider",
                format!("Chat with {} is not available yet", order.rider.name),
            )),
            Action::CancelOrder => {
                info!(order = %order.id, "Cancel order requested");
                ScreenAction::Toast(Toast::error(
                    "Cancel order",
                    format!("Order #{} is already being processed", order.id),
                ))
            }
            _ => ScreenAction::None,
        }
    }
}

impl HasCommands for TrackingScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            (Action::CallRider, "Call"),
            (Action::MessageRider, "Message"),
            (Action::CancelOrder, "Cancel Order"),
            (Action::Back, "Back"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(action, label))
        .collect()
    }
}

pub struct TrackingScreen<'a> {
    theme: &'a Theme,
}

impl<'a> TrackingScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_banner(&self, order: &ConfirmedOrder, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("✓ Booking #{} confirmed", order.reference),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} x{} · pickup {}, {} · {}",
                order.service.name,
                order.quantity,
                order.pickup_date,
                order.time_slot,
                naira(order.total)
            )),
        ])
        .style(self.theme.active_tab_style)
        .render(area, buf);
    }

    fn render_order(&self, state: &TrackingScreenState, area: Rect, buf: &mut Buffer) {
        let order = state.catalog.tracked_order();
        let block = panel("Order", self.theme, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [text, gauge] =
            Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).areas(inner);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("#{}", order.id), self.theme.title_style),
                Span::raw("  "),
                Span::styled(format!(" {} ", order.status.label()), self.theme.selection_style),
            ]),
            Line::from(Span::styled(
                format!("{} • {} items", order.service, order.items),
                self.theme.dimmed_style,
            )),
            Line::from(format!(
                "Pickup Time {}   Delivery Time {}",
                order.pickup_time, order.delivery_time
            )),
            Line::from(vec![
                Span::raw("Total Amount "),
                Span::styled(naira(order.total), self.theme.title_style),
            ]),
        ])
        .render(text, buf);

        Gauge::default()
            .ratio(order.progress().clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(self.theme.accent_text))
            .label("")
            .render(gauge, buf);
    }

    fn render_rider(&self, state: &TrackingScreenState, area: Rect, buf: &mut Buffer) {
        let rider = &state.catalog.tracked_order().rider;
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {} ", rider.initials()), self.theme.active_tab_style),
                Span::raw(" "),
                Span::styled(rider.name.as_str(), self.theme.title_style),
            ]),
            Line::from(format!("⭐ {:.1}  ·  {}", rider.rating, rider.phone)),
            Line::from(Span::styled(
                "[c] Call   [m] Message",
                self.theme.dimmed_style,
            )),
        ])
        .block(panel("Your Rider", self.theme, false))
        .render(area, buf);
    }

    fn step_lines<'s>(&self, step: &'s TrackingStep) -> [Line<'s>; 2] {
        let (marker, style) = match step.state {
            StepState::Completed => ("●", Style::default().fg(self.theme.success)),
            StepState::Active => (
                "◉",
                Style::default()
                    .fg(self.theme.accent_text)
                    .add_modifier(Modifier::BOLD),
            ),
            StepState::Pending => ("○", self.theme.dimmed_style),
        };
        [
            Line::from(vec![
                Span::styled(format!("{marker} "), style),
                Span::styled(step.title.as_str(), style),
                Span::styled(format!("  {}", step.time), self.theme.dimmed_style),
            ]),
            Line::from(Span::styled(
                format!("  {}", step.description),
                self.theme.dimmed_style,
            )),
        ]
    }

    fn render_timeline(&self, state: &TrackingScreenState, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = state
            .catalog
            .tracked_order()
            .steps
            .iter()
            .flat_map(|step| self.step_lines(step))
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Order Timeline", self.theme, false))
            .render(area, buf);
    }

    fn render_cancel(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from("[x] Cancel Order").centered())
            .style(Style::default().fg(self.theme.danger))
            .render(area, buf);
    }
}

impl StatefulWidget for TrackingScreen<'_> {
    type State = TrackingScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let banner_height = if state.latest_booking.is_some() { 2 } else { 0 };
        let [banner, body, cancel] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(order) = &state.latest_booking {
            self.render_banner(order, banner, buf);
        }

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);
        let [order_area, rider_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Length(5)]).areas(left);

        self.render_order(state, order_area, buf);
        self.render_rider(state, rider_area, buf);
        self.render_timeline(state, right, buf);
        self.render_cancel(cancel, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastLevel;
    use crate::domain::entities::{BillingUnit, PickupDate, Service, TimeSlot};
    use crate::infrastructure::StaticCatalog;
    use test_case::test_case;

    fn state() -> TrackingScreenState {
        TrackingScreenState::new(Arc::new(StaticCatalog::new()))
    }

    #[test_case(Action::CallRider, ToastLevel::Info ; "call")]
    #[test_case(Action::MessageRider, ToastLevel::Info ; "message")]
    #[test_case(Action::CancelOrder, ToastLevel::Error ; "cancel")]
    fn test_rider_actions_only_toast(action: Action, level: ToastLevel) {
        let mut tracking = state();
        let ScreenAction::Toast(toast) = tracking.handle_action(action) else {
            panic!("expected a toast");
        };
        assert_eq!(toast.level, level);
    }

    #[test]
    fn test_call_toast_names_rider() {
        let mut tracking = state();
        let ScreenAction::Toast(toast) = tracking.handle_action(Action::CallRider) else {
            panic!("expected a toast");
        };
        assert!(toast.message.contains("Adebayo Ogundimu"));
        assert!(toast.message.contains("+234 801 234 5678"));
    }

    #[test]
    fn test_back_goes_home() {
        let mut tracking = state();
        assert!(matches!(
            tracking.handle_action(Action::Back),
            ScreenAction::Navigate(Screen::Home)
        ));
        assert!(tracking.handle_action(Action::NewOrder).is_none());
    }

    #[test]
    fn test_render_with_latest_booking() {
        let theme = Theme::default();
        let mut tracking = state();
        tracking.set_latest_booking(ConfirmedOrder {
            reference: "ZW003".to_string(),
            service: Service::new("ironing", "Ironing Only", 200, BillingUnit::Item, "👔", ""),
            quantity: 4,
            pickup_date: PickupDate::new("Today"),
            time_slot: TimeSlot::new("8:00 AM - 10:00 AM"),
            instructions: None,
            subtotal: 800,
            total: 900,
        });
        let area = Rect::new(0, 0, 110, 26);
        let mut buf = Buffer::empty(area);

        TrackingScreen::new(&theme).render(area, &mut buf, &mut tracking);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Booking #ZW003 confirmed"));
        assert!(text.contains("#ZW001"));
        assert!(text.contains("Adebayo Ogundimu"));
        assert!(text.contains("Items Collected"));
    }
}
