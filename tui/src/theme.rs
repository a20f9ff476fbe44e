//! Color theme and glyphs for Folio TUI.
//!
//! A near-black green base with neon slide accents, plus an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::{Accent, UiOptions};

/// Folio color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(5, 10, 8);
    pub const BG_PANEL: Color = Color::Rgb(12, 20, 16);
    pub const BG_FIELD: Color = Color::Rgb(20, 32, 26);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(236, 240, 236);
    pub const TEXT_SECONDARY: Color = Color::Rgb(178, 190, 182);
    pub const TEXT_MUTED: Color = Color::Rgb(104, 120, 110);

    // === Slide accents ===
    pub const GREEN: Color = Color::Rgb(0, 255, 136);
    pub const PINK: Color = Color::Rgb(255, 64, 160);
    pub const VIOLET: Color = Color::Rgb(157, 112, 255);
    pub const CYAN: Color = Color::Rgb(0, 220, 255);
    pub const AMBER: Color = Color::Rgb(255, 176, 32);
    pub const WHITE: Color = Color::Rgb(250, 250, 250);

    // === Semantic Aliases ===
    pub const SUCCESS: Color = GREEN;
    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_field: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub green: Color,
    pub pink: Color,
    pub violet: Color,
    pub cyan: Color,
    pub amber: Color,
    pub white: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_field: colors::BG_FIELD,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            green: colors::GREEN,
            pink: colors::PINK,
            violet: colors::VIOLET,
            cyan: colors::CYAN,
            amber: colors::AMBER,
            white: colors::WHITE,
            success: colors::SUCCESS,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_field: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            green: Color::Green,
            pink: Color::Magenta,
            violet: Color::LightMagenta,
            cyan: Color::Cyan,
            amber: Color::Yellow,
            white: Color::White,
            success: Color::Green,
            error: Color::Red,
        }
    }

    #[must_use]
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Green => self.green,
            Accent::Pink => self.pink,
            Accent::Violet => self.violet,
            Accent::Cyan => self.cyan,
            Accent::Amber => self.amber,
            Accent::White => self.white,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for indicators and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub bar_active: &'static str,
    pub bar_inactive: &'static str,
    pub cursor: &'static str,
    pub sent: &'static str,
    pub failed: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dot_active: "O",
            dot_inactive: "o",
            bar_active: "====",
            bar_inactive: "----",
            cursor: "_",
            sent: "OK",
            failed: "!",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            dot_active: "●",
            dot_inactive: "○",
            bar_active: "━━━━",
            bar_inactive: "────",
            cursor: "▏",
            sent: "✓",
            failed: "✗",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_link(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn title(accent: Color) -> Style {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.amber)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }
}
