use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::chart::options::ColorScheme;

// ---------------------------------------------------------------------------
// Hex parsing / shading
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (or `#rgb`) into a [`Color32`].
pub fn parse_hex(code: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(code).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Shift the HSL lightness of `color` by `delta` (−1.0 ..= 1.0).
pub fn shade(color: Color32, delta: f32) -> Color32 {
    let rgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Palette: the colors of the active scheme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color32>,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let colors = scheme
            .hex_codes()
            .iter()
            .filter_map(|code| {
                let c = parse_hex(code);
                if c.is_none() {
                    log::warn!("ignoring malformed palette color {code}");
                }
                c
            })
            .collect();
        Palette { colors }
    }

    /// Single-series color (bar / line).
    pub fn primary(&self) -> Color32 {
        self.color_at(0)
    }

    /// Per-point color, cycling through the palette.
    pub fn color_at(&self, index: usize) -> Color32 {
        if self.colors.is_empty() {
            return Color32::GRAY;
        }
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_codes() {
        assert_eq!(parse_hex("#8884d8"), Some(Color32::from_rgb(0x88, 0x84, 0xd8)));
        assert_eq!(parse_hex("#FF0000"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn every_scheme_has_five_colors() {
        for scheme in ColorScheme::ALL {
            assert_eq!(Palette::for_scheme(scheme).len(), 5, "{scheme:?}");
        }
    }

    #[test]
    fn colors_cycle() {
        let p = Palette::for_scheme(ColorScheme::Warm);
        assert_eq!(p.primary(), Color32::from_rgb(0xFF, 0x80, 0x42));
        assert_eq!(p.color_at(7), p.color_at(2));
        assert_eq!(p.color_at(2), Color32::from_rgb(0xFF, 0, 0));
    }

    #[test]
    fn shading_moves_lightness() {
        let base = Color32::from_rgb(0x80, 0x80, 0x80);
        let lighter = shade(base, 0.2);
        let darker = shade(base, -0.2);
        assert!(lighter.r() > base.r());
        assert!(darker.r() < base.r());
        assert_eq!(shade(Color32::WHITE, 0.5), Color32::WHITE);
    }
}
