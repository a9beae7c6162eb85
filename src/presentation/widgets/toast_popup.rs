use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Toast, ToastLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 48;
const TOP_OFFSET: u16 = 2;

/// Top-right popup for the current toast.
pub struct ToastPopup<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastPopup<'a> {
    #[must_use]
    pub const fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }

    /// Popup rectangle inside `area`.
    fn popup_area(&self, area: Rect, title: &str) -> Rect {
        let message_width = u16::try_from(self.toast.message.width()).unwrap_or(u16::MAX);
        let title_width = u16::try_from(title.width()).unwrap_or(u16::MAX);
        let width = message_width
            .max(title_width)
            .saturating_add(4)
            .min(MAX_WIDTH.min(area.width.saturating_sub(2)));

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(8);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        Rect::new(x, area.y + TOP_OFFSET, width, height).intersection(area)
    }
}

impl Widget for ToastPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.toast.title);
        let popup = self.popup_area(area, &title);
        if popup.area() == 0 {
            return;
        }

        let color = match self.toast.level {
            ToastLevel::Info => self.theme.accent_text,
            ToastLevel::Success => self.theme.success,
            ToastLevel::Warn => Color::Yellow,
            ToastLevel::Error => self.theme.danger,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        Clear.render(popup, buf);
        Paragraph::new(self.toast.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(popup, buf);
    }
}
