use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::presentation::theme::Theme;

/// Formats whole naira, e.g. `₦1600`.
#[must_use]
pub fn naira(amount: u64) -> String {
    format!("₦{amount}")
}

/// Naira with thousands separators, e.g. `₦2,500`.
#[must_use]
pub fn naira_grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("₦{out}")
}

/// Greeting for the given local hour (0-23).
#[must_use]
pub const fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning!",
        12..=16 => "Good Afternoon!",
        _ => "Good Evening!",
    }
}

/// Bordered panel; focused panels use the accent border.
#[must_use]
pub fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(theme.accent_text)
    } else {
        theme.dimmed_style
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {title} "), theme.title_style))
}

/// Centers a `width` x `height` rectangle inside `area`.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(vertical);
    center
}

/// Marker used in front of list rows.
#[must_use]
pub const fn cursor_marker(focused: bool) -> &'static str {
    if focused { "▶ " } else { "  " }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_naira() {
        assert_eq!(naira(0), "₦0");
        assert_eq!(naira(1600), "₦1600");
    }

    #[test_case(0, "₦0" ; "zero")]
    #[test_case(999, "₦999" ; "hundreds")]
    #[test_case(2500, "₦2,500" ; "thousands")]
    #[test_case(1_234_567, "₦1,234,567" ; "millions")]
    fn test_naira_grouped(amount: u64, expected: &str) {
        assert_eq!(naira_grouped(amount), expected);
    }

    #[test_case(0, "Good Morning!" ; "midnight")]
    #[test_case(9, "Good Morning!" ; "morning")]
    #[test_case(12, "Good Afternoon!" ; "noon")]
    #[test_case(16, "Good Afternoon!" ; "late_afternoon")]
    #[test_case(17, "Good Evening!" ; "evening")]
    #[test_case(23, "Good Evening!" ; "night")]
    fn test_greeting(hour: u32, expected: &str) {
        assert_eq!(greeting(hour), expected);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));

        let clamped = centered_rect(200, 80, area);
        assert_eq!(clamped, area);
    }
}
