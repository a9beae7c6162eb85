//! Colors and styles derived from the configured accent.

pub mod adapter;

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::infrastructure::config::{ThemeConfig, ThemeMode};
use adapter::ColorConverter;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    /// Accent adjusted to stay readable as foreground text.
    pub accent_text: Color,
    pub selection_style: Style,
    pub active_tab_style: Style,
    pub title_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub success: Color,
    pub danger: Color,
    pub badge_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::from_color(parse_color(&config.accent_color), config.mode)
    }

    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let (text_lightness, selection_lightness) = match mode {
            ThemeMode::Dark => (0.72, 0.22),
            ThemeMode::Light => (0.3, 0.88),
        };
        let accent_text = ColorConverter::shade(accent, text_lightness, 0.7);
        let selection_bg = ColorConverter::shade(accent, selection_lightness, 0.45);
        let base_fg = match mode {
            ThemeMode::Dark => Color::White,
            ThemeMode::Light => Color::Black,
        };

        Self {
            accent,
            accent_text,
            selection_style: Style::default().bg(selection_bg).fg(base_fg),
            active_tab_style: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            title_style: Style::default()
                .fg(accent_text)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            success: Color::Green,
            danger: Color::Red,
            badge_style: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "navy" => Color::Rgb(30, 58, 138),
        "orange" => Color::Indexed(208),
        _ => Color::Blue,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let double = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Navy"), Color::Rgb(30, 58, 138));
        assert_eq!(parse_color("not-a-color"), Color::Blue);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("123456"), None);
    }

    #[test]
    fn test_default_theme_uses_navy_accent() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(30, 58, 138));
        assert_ne!(theme.accent_text, theme.accent);
    }
}
