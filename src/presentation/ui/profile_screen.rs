//! Profile: account card, contact details, settings, menu and activity.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use tracing::{debug, info};

use crate::domain::entities::ActivityKind;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Screen, Toast};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::ui::utils::{cursor_marker, panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFocus {
    PushNotifications,
    EmailNotifications,
    Menu(usize),
    Logout,
}

pub struct ProfileScreenState {
    catalog: Arc<dyn CatalogPort>,
    push_notifications: bool,
    email_notifications: bool,
    focus: ProfileFocus,
}

impl ProfileScreenState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            push_notifications: true,
            email_notifications: false,
            focus: ProfileFocus::PushNotifications,
        }
    }

    #[must_use]
    pub const fn push_notifications(&self) -> bool {
        self.push_notifications
    }

    #[must_use]
    pub const fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    #[must_use]
    pub const fn focus(&self) -> ProfileFocus {
        self.focus
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Back => ScreenAction::Navigate(Screen::Home),
            Action::NavigateDown => {
                self.focus = self.below();
                ScreenAction::None
            }
            Action::NavigateUp => {
                self.focus = self.above();
                ScreenAction::None
            }
            Action::Logout => Self::logout(),
            Action::Select => self.activate(),
            _ => ScreenAction::None,
        }
    }

    fn below(&self) -> ProfileFocus {
        let items = self.catalog.menu_items().len();
        match self.focus {
            ProfileFocus::PushNotifications => ProfileFocus::EmailNotifications,
            ProfileFocus::EmailNotifications if items > 0 => ProfileFocus::Menu(0),
            ProfileFocus::Menu(i) if i + 1 < items => ProfileFocus::Menu(i + 1),
            ProfileFocus::EmailNotifications | ProfileFocus::Menu(_) | ProfileFocus::Logout => {
                ProfileFocus::Logout
            }
        }
    }

    fn above(&self) -> ProfileFocus {
        let items = self.catalog.menu_items().len();
        match self.focus {
            ProfileFocus::PushNotifications | ProfileFocus::EmailNotifications => {
                ProfileFocus::PushNotifications
            }
            ProfileFocus::Menu(0) => ProfileFocus::EmailNotifications,
            ProfileFocus::Menu(i) => ProfileFocus::Menu(i - 1),
            ProfileFocus::Logout if items > 0 => ProfileFocus::Menu(items - 1),
            ProfileFocus::Logout => ProfileFocus::EmailNotifications,
        }
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus {
            ProfileFocus::PushNotifications => {
                self.push_notifications = !self.push_notifications;
                debug!(enabled = self.push_notifications, "Push notifications toggled");
                ScreenAction::None
            }
            ProfileFocus::EmailNotifications => {
                self.email_notifications = !self.email_notifications;
                debug!(enabled = self.email_notifications, "Email notifications toggled");
                ScreenAction::None
            }
            ProfileFocus::Menu(i) => self.catalog.menu_items().get(i).map_or(
                ScreenAction::None,
                |item| {
                    ScreenAction::Toast(Toast::info(
                        item.label.as_str(),
                        "This section is not available yet",
                    ))
                },
            ),
            ProfileFocus::Logout => Self::logout(),
        }
    }

    fn logout() -> ScreenAction {
        info!("Logout requested");
        ScreenAction::Toast(Toast::info("Logout", "Accounts are not available yet"))
    }
}

impl HasCommands for ProfileScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            (Action::Select, "Toggle/Open"),
            (Action::Logout, "Logout"),
            (Action::Back, "Back"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(action, label))
        .collect()
    }
}

pub struct ProfileScreen<'a> {
    theme: &'a Theme,
}

impl<'a> ProfileScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn row_style(&self, focused: bool) -> Style {
        if focused {
            self.theme.selection_style
        } else {
            self.theme.base_style
        }
    }

    fn render_card(&self, state: &ProfileScreenState, area: Rect, buf: &mut Buffer) {
        let profile = state.catalog.profile();
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {} ", profile.initials()), self.theme.active_tab_style),
                Span::raw(" "),
                Span::styled(profile.name.as_str(), self.theme.title_style),
            ]),
            Line::from(format!("⭐ {:.1} rating", profile.rating)),
            Line::from(Span::styled(
                format!("Member since {}", profile.join_date),
                self.theme.dimmed_style,
            )),
            Line::from(vec![
                Span::styled(profile.total_orders.to_string(), self.theme.title_style),
                Span::raw(" Total Orders   "),
                Span::styled(profile.loyalty_points.to_string(), self.theme.title_style),
                Span::raw(" Loyalty Points"),
            ]),
        ])
        .block(panel("Profile", self.theme, true))
        .render(area, buf);
    }

    fn render_contact(&self, state: &ProfileScreenState, area: Rect, buf: &mut Buffer) {
        let profile = state.catalog.profile();
        Paragraph::new(vec![
            Line::from(format!("✉ {}", profile.email)),
            Line::from(format!("☎ {}", profile.phone)),
            Line::from(format!("📍 {}", profile.address)),
        ])
        .wrap(Wrap { trim: true })
        .block(panel("Contact Information", self.theme, false))
        .render(area, buf);
    }

    fn toggle_line(&self, label: &'static str, on: bool, focused: bool) -> Line<'static> {
        Line::from(vec![
            Span::raw(cursor_marker(focused)),
            Span::styled(label, self.row_style(focused)),
            Span::raw("  "),
            if on {
                Span::styled("[ ON]", Style::default().fg(self.theme.success))
            } else {
                Span::styled("[OFF]", self.theme.dimmed_style)
            },
        ])
    }

    fn render_settings(&self, state: &ProfileScreenState, area: Rect, buf: &mut Buffer) {
        let focused = matches!(
            state.focus,
            ProfileFocus::PushNotifications | ProfileFocus::EmailNotifications
        );
        Paragraph::new(vec![
            self.toggle_line(
                "🔔 Push Notifications ",
                state.push_notifications,
                state.focus == ProfileFocus::PushNotifications,
            ),
            self.toggle_line(
                "✉ Email Notifications",
                state.email_notifications,
                state.focus == ProfileFocus::EmailNotifications,
            ),
        ])
        .block(panel("Quick Settings", self.theme, focused))
        .render(area, buf);
    }

    fn render_menu(&self, state: &ProfileScreenState, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = state
            .catalog
            .menu_items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let focused = state.focus == ProfileFocus::Menu(i);
                let mut spans = vec![
                    Span::raw(cursor_marker(focused)),
                    Span::styled(item.label.as_str(), self.row_style(focused)),
                ];
                if let Some(badge) = &item.badge {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        format!(" {badge} "),
                        Style::default().fg(self.theme.success),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let logout_focused = state.focus == ProfileFocus::Logout;
        lines.push(Line::from(vec![
            Span::raw(cursor_marker(logout_focused)),
            Span::styled(
                "⏻ Logout",
                if logout_focused {
                    self.theme.selection_style
                } else {
                    Style::default().fg(self.theme.danger)
                },
            ),
        ]));

        let focused = matches!(state.focus, ProfileFocus::Menu(_) | ProfileFocus::Logout);
        Paragraph::new(lines)
            .block(panel("Account", self.theme, focused))
            .render(area, buf);
    }

    fn render_activity(&self, state: &ProfileScreenState, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = state
            .catalog
            .recent_activity()
            .iter()
            .map(|activity| {
                let icon = match activity.kind {
                    ActivityKind::Order => "📦",
                    ActivityKind::Referral => "🎁",
                    ActivityKind::Review => "⭐",
                };
                Line::from(vec![
                    Span::raw(format!("{icon} ")),
                    Span::raw(activity.description.as_str()),
                    Span::styled(format!("  {}", activity.date), self.theme.dimmed_style),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .block(panel("Recent Activity", self.theme, false))
            .render(area, buf);
    }
}

impl StatefulWidget for ProfileScreen<'_> {
    type State = ProfileScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        let [card, contact, settings] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(4),
        ])
        .areas(left);
        let menu_height = u16::try_from(state.catalog.menu_items().len()).unwrap_or(8) + 3;
        let [menu, activity] =
            Layout::vertical([Constraint::Length(menu_height), Constraint::Min(3)]).areas(right);

        self.render_card(state, card, buf);
        self.render_contact(state, contact, buf);
        self.render_settings(state, settings, buf);
        self.render_menu(state, menu, buf);
        self.render_activity(state, activity, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastLevel;
    use crate::infrastructure::StaticCatalog;

    fn state() -> ProfileScreenState {
        ProfileScreenState::new(Arc::new(StaticCatalog::new()))
    }

    #[test]
    fn test_toggles_flip_independently() {
        let mut profile = state();
        assert!(profile.push_notifications());
        assert!(!profile.email_notifications());

        profile.handle_action(Action::Select);
        assert!(!profile.push_notifications());

        profile.handle_action(Action::NavigateDown);
        profile.handle_action(Action::Select);
        assert!(profile.email_notifications());
        assert!(!profile.push_notifications());
    }

    #[test]
    fn test_menu_item_shows_unavailable_toast() {
        let mut profile = state();
        for _ in 0..6 {
            profile.handle_action(Action::NavigateDown);
        }
        assert_eq!(profile.focus(), ProfileFocus::Menu(4));

        let ScreenAction::Toast(toast) = profile.handle_action(Action::Select) else {
            panic!("expected a toast");
        };
        assert_eq!(toast.title, "Referral Program");
        assert_eq!(toast.level, ToastLevel::Info);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut profile = state();
        profile.handle_action(Action::NavigateUp);
        assert_eq!(profile.focus(), ProfileFocus::PushNotifications);

        for _ in 0..30 {
            profile.handle_action(Action::NavigateDown);
        }
        assert_eq!(profile.focus(), ProfileFocus::Logout);
        profile.handle_action(Action::NavigateUp);
        assert_eq!(profile.focus(), ProfileFocus::Menu(7));
    }

    #[test]
    fn test_logout_is_a_toast() {
        let mut profile = state();
        let ScreenAction::Toast(toast) = profile.handle_action(Action::Logout) else {
            panic!("expected a toast");
        };
        assert_eq!(toast.title, "Logout");
    }

    #[test]
    fn test_render_profile() {
        let theme = Theme::default();
        let mut profile = state();
        let area = Rect::new(0, 0, 110, 24);
        let mut buf = Buffer::empty(area);

        ProfileScreen::new(&theme).render(area, &mut buf, &mut profile);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("IJC"));
        assert!(text.contains("Ifeanyi John Chimezie"));
        assert!(text.contains("Earn ₦200"));
        assert!(text.contains("Friend joined via your referral"));
    }
}
