use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{centered_rect, panel};
use crate::presentation::widgets::FooterBar;

const WIDTH: u16 = 52;
const KEY_COLUMN: usize = 10;

/// Modal listing global and screen key bindings.
pub struct HelpPopup<'a> {
    global: &'a [Keybind],
    screen: &'a [Keybind],
    screen_title: &'a str,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    #[must_use]
    pub const fn new(
        global: &'a [Keybind],
        screen: &'a [Keybind],
        screen_title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            global,
            screen,
            screen_title,
            theme,
        }
    }

    fn section(&self, title: &'a str, bindings: &'a [Keybind]) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(title, self.theme.title_style))];
        lines.extend(bindings.iter().map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<KEY_COLUMN$}", FooterBar::format_key(&binding.key)),
                    self.theme.selection_style,
                ),
                Span::raw(" "),
                Span::raw(binding.label.as_ref()),
            ])
        }));
        lines
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = self.section("Global", self.global);
        lines.push(Line::default());
        lines.extend(self.section(self.screen_title, self.screen));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            self.theme.dimmed_style,
        )));

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered_rect(WIDTH, height, area);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .style(self.theme.base_style)
            .block(panel("Help", self.theme, true))
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_lists_both_sections() {
        let theme = Theme::default();
        let global = [Keybind::new(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit,
            "Quit",
        )];
        let screen = [Keybind::new(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE),
            Action::FundWallet,
            "Fund Wallet",
        )];
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        HelpPopup::new(&global, &screen, "Wallet", &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Global"));
        assert!(text.contains("Quit"));
        assert!(text.contains("Wallet"));
        assert!(text.contains("Fund Wallet"));
    }
}
