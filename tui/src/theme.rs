//! Color theme and glyphs for the Perspective TUI.
//!
//! Uses a muted Kanagawa-derived palette by default with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use perspective_types::ui::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55);
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109);

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub peach: Color,
    pub red: Color,
    pub blue: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            peach: colors::ORANGE,
            red: colors::RED,
            blue: colors::BLUE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            peach: Color::Yellow,
            red: Color::Red,
            blue: Color::Blue,
        }
    }

    /// Hues used by the color perception experience, in hue order.
    #[must_use]
    pub fn spectrum(&self) -> [Color; 6] {
        [
            self.red,
            self.peach,
            self.warning,
            self.success,
            self.accent,
            self.blue,
        ]
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

/// ASCII/Unicode glyphs for indicators and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dot_filled: &'static str,
    pub dot_empty: &'static str,
    pub selected: &'static str,
    pub back: &'static str,
    pub reflect: &'static str,
    pub shift: &'static str,
    pub completed: &'static str,
    pub block_full: &'static str,
    pub block_light: &'static str,
    pub target: &'static str,
    pub distractor_frames: &'static [&'static str],
}

const DISTRACTOR_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
const DISTRACTOR_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dot_filled: "*",
            dot_empty: ".",
            selected: ">",
            back: "<",
            reflect: "+",
            shift: "@",
            completed: "v",
            block_full: "#",
            block_light: ":",
            target: "O",
            distractor_frames: DISTRACTOR_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            dot_filled: "●",
            dot_empty: "○",
            selected: "▸",
            back: "‹",
            reflect: "✦",
            shift: "◎",
            completed: "✓",
            block_full: "█",
            block_light: "░",
            target: "◉",
            distractor_frames: DISTRACTOR_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn distractor_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).distractor_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Terminal glyph for an experience icon identifier.
#[must_use]
pub fn icon_glyph(icon: &str, options: UiOptions) -> &'static str {
    if options.ascii_only {
        return match icon {
            "eye.trianglebadge.exclamationmark" => "(!)",
            "paintpalette" => "(%)",
            "scope" => "(o)",
            "text.justify.left" => "(=)",
            "brain.head.profile" => "(m)",
            "bolt.ring.closed" => "(z)",
            "square.stack.3d.up" => "(#)",
            "hand.tap" => "(+)",
            "square.grid.2x2" => "[:]",
            "sparkles" => "(*)",
            "circle" => "( )",
            _ => "(?)",
        };
    }
    match icon {
        "eye.trianglebadge.exclamationmark" => "◉",
        "paintpalette" => "◈",
        "scope" => "⊙",
        "text.justify.left" => "≡",
        "brain.head.profile" => "◍",
        "bolt.ring.closed" => "ϟ",
        "square.stack.3d.up" => "▤",
        "hand.tap" => "☝",
        "square.grid.2x2" => "⊞",
        "sparkles" => "✧",
        "circle" => "○",
        _ => "•",
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn dimmed(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled)
    }

    #[must_use]
    pub fn node(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn node_selected(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn node_completed(palette: &Palette) -> Style {
        Style::default().fg(palette.success)
    }

    #[must_use]
    pub fn reflect_enabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn reflect_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
