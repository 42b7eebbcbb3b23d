//! Accent color derivation for the console shell.
//!
//! The whole UI tints itself after the body the operator is looking at:
//! selection wins, hover is a preview, and the Sun anchors the idle state.

use bevy::prelude::*;
use bevy_egui::egui::Color32;

use crate::catalog::Catalog;
use crate::interaction::{HoveredBody, SelectedBody};

/// Fallback accent when a catalog color string fails to parse.
const FALLBACK: Color32 = Color32::from_rgb(0x4d, 0xee, 0xea);

/// Current UI accent pair, refreshed every frame from the active body.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub primary: Color32,
    pub secondary: Color32,
}

impl Default for Accent {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(0xff, 0xdd, 0x00),
            secondary: Color32::from_rgb(0xff, 0x88, 0x00),
        }
    }
}

impl Accent {
    /// Primary accent with alpha applied, for glows and translucent fills.
    pub fn primary_with_alpha(&self, alpha: u8) -> Color32 {
        let [r, g, b, _] = self.primary.to_array();
        Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }
}

/// Parse a `#rrggbb` hex string. Short forms and alpha are not in the catalog
/// so they are not accepted.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Parse a catalog color pair, substituting the fallback for bad entries.
pub fn accent_from_colors(colors: [&str; 2]) -> Accent {
    Accent {
        primary: parse_hex(colors[0]).unwrap_or(FALLBACK),
        secondary: parse_hex(colors[1]).unwrap_or(FALLBACK),
    }
}

/// Refresh the accent from selection, falling back to hover, then the Sun.
pub fn update_accent(
    catalog: Res<Catalog>,
    selected: Res<SelectedBody>,
    hovered: Res<HoveredBody>,
    mut accent: ResMut<Accent>,
) {
    let active = catalog
        .by_id(selected.id)
        .or_else(|| hovered.id.and_then(|id| catalog.by_id(id)))
        .unwrap_or_else(|| catalog.sun());

    let next = accent_from_colors(active.colors);
    if *accent != next {
        *accent = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_hex_strings() {
        assert_eq!(parse_hex("#4deeea"), Some(Color32::from_rgb(0x4d, 0xee, 0xea)));
        assert_eq!(parse_hex("#000080"), Some(Color32::from_rgb(0, 0, 0x80)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("4deeea"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#4deeea00"), None);
    }

    #[test]
    fn bad_entries_fall_back() {
        let accent = accent_from_colors(["#zzzzzz", "#0077be"]);
        assert_eq!(accent.primary, FALLBACK);
        assert_eq!(accent.secondary, Color32::from_rgb(0, 0x77, 0xbe));
    }

    #[test]
    fn every_catalog_color_parses() {
        let catalog = Catalog::default();
        for body in catalog.all() {
            for hex in body.colors {
                assert!(parse_hex(hex).is_some(), "{}: bad color {hex}", body.id);
            }
        }
    }

    #[test]
    fn alpha_helper_keeps_the_alpha_channel() {
        let accent = accent_from_colors(["#ff4400", "#aa2200"]);
        let glow = accent.primary_with_alpha(40);
        assert_eq!(glow.a(), 40);
        assert_eq!(glow, Color32::from_rgba_unmultiplied(0xff, 0x44, 0x00, 40));
    }
}
