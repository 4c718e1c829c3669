//! Color theme and glyphs for the Keepsake TUI.
//!
//! A soft rose palette by default, with per-color overrides from the
//! `[theme]` config table and an optional high-contrast mode.

use ratatui::style::{Color, Modifier, Style};

use keepsake_engine::{ThemeConfig, UiOptions};
use keepsake_types::HexColor;

/// Default rose palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(28, 22, 30); // plum black
    pub const BG_PANEL: Color = Color::Rgb(40, 31, 42);
    pub const BG_POPUP: Color = Color::Rgb(52, 40, 54);
    pub const BG_BORDER: Color = Color::Rgb(94, 72, 94);

    pub const TEXT_PRIMARY: Color = Color::Rgb(244, 232, 236);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 130, 142);

    pub const PRIMARY: Color = Color::Rgb(255, 143, 171); // rose
    pub const ACCENT: Color = Color::Rgb(251, 111, 146); // deep rose
    pub const DEEP: Color = Color::Rgb(164, 74, 112); // mulberry
    pub const GOLD: Color = Color::Rgb(240, 200, 121);

    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub deep: Color,
    pub gold: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            deep: colors::DEEP,
            gold: colors::GOLD,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::Magenta,
            accent: Color::Magenta,
            deep: Color::White,
            gold: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Colors confetti particles index into, in `color_index` order.
    #[must_use]
    pub fn confetti(&self) -> [Color; 3] {
        [self.primary, self.accent, self.gold]
    }
}

fn to_color(hex: HexColor) -> Color {
    let (r, g, b) = hex.channels();
    Color::Rgb(r, g, b)
}

/// Resolve the palette: high-contrast wins, otherwise the standard palette
/// with any configured overrides applied.
#[must_use]
pub fn palette(theme: &ThemeConfig, options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast();
    }
    let mut palette = Palette::standard();
    if let Some(primary) = theme.primary {
        palette.primary = to_color(primary);
    }
    if let Some(accent) = theme.accent {
        palette.accent = to_color(accent);
    }
    if let Some(deep) = theme.deep {
        palette.deep = to_color(deep);
    }
    if let Some(background) = theme.background {
        palette.bg_dark = to_color(background);
    }
    palette
}

/// ASCII/Unicode glyphs for hearts, cards, and confetti.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub heart: &'static str,
    pub envelope_closed: &'static str,
    pub envelope_open: &'static str,
    pub photo: &'static str,
    pub slot_empty: &'static str,
    pub selected: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub close: &'static str,
    pub confetti_round: &'static str,
    pub confetti_square: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "<3",
            envelope_closed: "[=]",
            envelope_open: "[^]",
            photo: "#",
            slot_empty: "_",
            selected: ">",
            arrow_left: "<",
            arrow_right: ">",
            close: "x",
            confetti_round: "o",
            confetti_square: "#",
        }
    } else {
        Glyphs {
            heart: "♥",
            envelope_closed: "✉",
            envelope_open: "💌",
            photo: "🖼",
            slot_empty: "•",
            selected: "▸",
            arrow_left: "◀",
            arrow_right: "▶",
            close: "✕",
            confetti_round: "●",
            confetti_square: "■",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn slot_idle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn slot_focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn slot_error(palette: &Palette) -> Style {
        Style::default().fg(palette.error).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn control_focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }
}
