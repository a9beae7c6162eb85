//! Bottom navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::Screen;
use crate::presentation::theme::Theme;

pub struct TabBar<'a> {
    active: Screen,
    profile_badge: Option<u32>,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    #[must_use]
    pub const fn new(active: Screen, theme: &'a Theme) -> Self {
        Self {
            active,
            profile_badge: None,
            theme,
        }
    }

    /// Unread count shown next to the Profile tab.
    #[must_use]
    pub const fn profile_badge(mut self, count: Option<u32>) -> Self {
        self.profile_badge = count;
        self
    }

    fn tab_line(&self, index: usize, screen: Screen) -> Line<'static> {
        let style = if self.active.tab_index() == index {
            self.theme.active_tab_style
        } else {
            self.theme.dimmed_style
        };

        let mut spans = vec![Span::styled(
            format!(" {} {} ", index + 1, screen.tab_label()),
            style,
        )];
        if screen == Screen::Profile
            && let Some(count) = self.profile_badge.filter(|c| *c > 0)
        {
            spans.push(Span::styled(format!(" {count} "), self.theme.badge_style));
        }
        Line::from(spans).centered()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default());
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (index, (screen, column)) in Screen::TABS.iter().zip(columns.iter()).enumerate() {
            Paragraph::new(self.tab_line(index, *screen)).render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_renders_all_tabs_with_badge() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        TabBar::new(Screen::Wallet, &theme)
            .profile_badge(Some(3))
            .render(area, &mut buf);

        let text = row_text(&buf, 80);
        for label in ["1 Home", "2 Book", "3 Wallet", "4 Profile", " 3 "] {
            assert!(text.contains(label), "missing {label:?} in {text:?}");
        }
    }

    #[test]
    fn test_zero_badge_hidden() {
        let theme = Theme::default();
        let bar = TabBar::new(Screen::Home, &theme).profile_badge(Some(0));
        assert_eq!(bar.tab_line(3, Screen::Profile).spans.len(), 1);
    }

    #[test]
    fn test_tracking_highlights_home() {
        let theme = Theme::default();
        let bar = TabBar::new(Screen::Tracking, &theme);
        let home = bar.tab_line(0, Screen::Home);
        assert_eq!(home.spans[0].style, theme.active_tab_style);
    }
}
