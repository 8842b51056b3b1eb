//! Brand palette and text helpers.
//!
//! Every colour goes through [`Palette`] so that `NO_COLOR`, pipes and the
//! `output.no_color` setting all produce plain text.

use aeon_core::domain::Accent;
use owo_colors::{OwoColorize, Rgb};

pub const AEON: Rgb = Rgb(139, 92, 246);
pub const AEON_BRIGHT: Rgb = Rgb(167, 139, 250);
pub const ELECTRIC: Rgb = Rgb(59, 130, 246);
pub const GOLD: Rgb = Rgb(250, 204, 21);
pub const GOLD_DIM: Rgb = Rgb(202, 138, 4);
pub const EMERALD: Rgb = Rgb(52, 211, 153);
pub const SUCCESS: Rgb = Rgb(34, 197, 94);
pub const ERROR: Rgb = Rgb(239, 68, 68);
pub const STEEL: Rgb = Rgb(115, 115, 115);

/// Decide whether to emit ANSI colour.
///
/// `NO_COLOR` wins over `FORCE_COLOR`, which wins over terminal detection.
pub fn color_enabled(no_color: bool, force_color: bool, is_terminal: bool) -> bool {
    if no_color {
        return false;
    }
    force_color || is_terminal
}

/// Whether an environment flag is set to a non-empty value.
pub fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

/// Linear blend of two colours, `t` in `0.0..=1.0`.
pub fn interpolate(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Colour for a stack accent.
pub fn accent(accent: Accent) -> Rgb {
    match accent {
        Accent::Aeon => AEON,
        Accent::AeonBright => AEON_BRIGHT,
        Accent::Electric => ELECTRIC,
        Accent::Emerald => EMERALD,
        Accent::Gold => GOLD_DIM,
    }
}

/// Left-pad `text` so it sits in the middle of `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let visible = console::measure_text_width(text);
    if visible >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - visible) / 2), text)
}

/// Right-pad to `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: Rgb) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_beats_force_color() {
        assert!(!color_enabled(true, true, true));
        assert!(color_enabled(false, true, false));
        assert!(color_enabled(false, false, true));
        assert!(!color_enabled(false, false, false));
    }

    #[test]
    fn interpolation_hits_both_ends() {
        assert_eq!(interpolate(AEON, ELECTRIC, 0.0), AEON);
        assert_eq!(interpolate(AEON, ELECTRIC, 1.0), ELECTRIC);
        assert_eq!(interpolate(Rgb(0, 0, 0), Rgb(100, 200, 50), 0.5), Rgb(50, 100, 25));
    }

    #[test]
    fn disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.paint("x", AEON), "x");
        assert_eq!(palette.bold("x"), "x");
        assert_eq!(palette.dim("x"), "x");
    }

    #[test]
    fn enabled_palette_emits_truecolor() {
        let painted = Palette::new(true).paint("x", ERROR);
        assert!(painted.contains("38;2;239;68;68"));
        assert_eq!(console::strip_ansi_codes(&painted), "x");
    }

    #[test]
    fn center_ignores_escape_codes() {
        let painted = Palette::new(true).paint("ab", AEON);
        assert_eq!(console::strip_ansi_codes(&center(&painted, 6)), "  ab");
        assert_eq!(center("too wide", 4), "too wide");
    }
}
