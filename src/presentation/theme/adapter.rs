use coolor::{Hsl, Rgb};
use ratatui::style::Color;

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(i) => ansi_to_rgb(i),
            named => named_to_rgb(named),
        };

        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue with the given lightness and saturation.
    #[must_use]
    pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness;
        hsl.s = saturation;
        Self::to_ratatui(hsl)
    }
}

const fn named_to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        _ => (255, 255, 255),
    }
}

fn ansi_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => named_to_rgb(ANSI_16[i as usize]),
        16..=231 => {
            let i = i - 16;
            let map = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (map(i / 36), map((i / 6) % 6), map(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

const ANSI_16: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_round_trip() {
        let original = Color::Rgb(30, 58, 138);
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(original));

        let Color::Rgb(r, g, b) = back else {
            panic!("Expected RGB color");
        };
        assert!((i16::from(r) - 30).abs() <= 1);
        assert!((i16::from(g) - 58).abs() <= 1);
        assert!((i16::from(b) - 138).abs() <= 1);
    }

    #[test]
    fn test_ansi_256_cube() {
        assert_eq!(ansi_to_rgb(208), (255, 135, 0));
        assert_eq!(ansi_to_rgb(16), (0, 0, 0));
        assert_eq!(ansi_to_rgb(231), (255, 255, 255));
        assert_eq!(ansi_to_rgb(1), (170, 0, 0));
        assert_eq!(ansi_to_rgb(232), (8, 8, 8));
    }

    #[test]
    fn test_shade_keeps_hue() {
        let navy = Color::Rgb(30, 58, 138);
        let light = ColorConverter::shade(navy, 0.8, 0.6);
        let hue_before = ColorConverter::to_hsl(navy).h;
        let hue_after = ColorConverter::to_hsl(light).h;
        assert!((hue_before - hue_after).abs() < 1.0);
    }
}
