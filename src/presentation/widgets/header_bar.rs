use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub clock: Style,
    pub battery: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let background = Style::default().bg(theme.accent).fg(Color::White);
        Self {
            background,
            app_name: background.add_modifier(Modifier::BOLD),
            clock: background,
            battery: background,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            clock: Style::default(),
            battery: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Phone-style status line: clock, app name and battery.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    clock: Option<&'a str>,
    battery_percent: u8,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str) -> Self {
        Self {
            app_name,
            clock: None,
            battery_percent: 100,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn clock(mut self, clock: Option<&'a str>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn battery(mut self, percent: u8) -> Self {
        self.battery_percent = percent;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn battery_text(&self) -> String {
        let filled = usize::from(self.battery_percent.min(100)).div_ceil(25);
        format!(
            "{}% [{}{}] ",
            self.battery_percent,
            "■".repeat(filled),
            " ".repeat(4 - filled)
        )
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, self.style.background);

        if let Some(clock) = self.clock {
            Paragraph::new(Line::from(Span::styled(format!(" {clock}"), self.style.clock)))
                .render(row, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            self.app_name.to_uppercase(),
            self.style.app_name,
        )))
        .alignment(Alignment::Center)
        .render(row, buf);

        Paragraph::new(Line::from(Span::styled(
            self.battery_text(),
            self.style.battery,
        )))
        .alignment(Alignment::Right)
        .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(header: HeaderBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_battery_text() {
        assert_eq!(HeaderBar::new("x").battery_text(), "100% [■■■■] ");
        assert_eq!(HeaderBar::new("x").battery(30).battery_text(), "30% [■■  ] ");
        assert_eq!(HeaderBar::new("x").battery(0).battery_text(), "0% [    ] ");
    }

    #[test]
    fn test_renders_clock_name_and_battery() {
        let line = render_to_string(HeaderBar::new("Zap Wash").clock(Some("9:41 AM")), 50);
        assert!(line.starts_with(" 9:41 AM"));
        assert!(line.contains("ZAP WASH"));
        assert!(line.trim_end().ends_with("100% [■■■■]"));
    }
}
