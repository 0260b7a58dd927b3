// Semantic theme layer
//
// Maps a small base palette to meaningful UI concepts (button variants,
// borders, selection, error text) so render code never touches raw
// colors. Two bundled variants, selected by the `theme` config value.
//
// Light theme support: selection foreground is derived from the
// selection color's luminance so highlighted rows stay readable.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Resolved theme ready for use in render functions
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Action Colors (button variants) ─────────────────────
    /// Default action color (the indigo "primary" of the source UI)
    pub primary: Color,
    pub danger: Color,
    pub warning: Color,
    pub success: Color,
    /// Fill for actions that cannot currently fire
    pub disabled: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    /// Border of the focused panel / active input
    pub border_focused: Color,
    pub status_bar: Color,
    /// Field error text under inputs
    pub error_text: Color,
    /// Placeholder text in empty inputs
    pub placeholder: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub selection: Color,
    /// Calculated for contrast against the selection background
    pub selection_fg: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Resolve a configured theme name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        let selection = Color::Rgb(68, 71, 90);
        Self {
            name: "dark",
            primary: Color::Rgb(99, 102, 241),  // indigo
            danger: Color::Rgb(220, 38, 38),    // red
            warning: Color::Rgb(250, 204, 21),  // yellow
            success: Color::Rgb(34, 197, 94),   // green
            disabled: Color::Rgb(75, 85, 99),   // grey

            title: Color::Rgb(129, 140, 248),
            border: Color::Rgb(100, 106, 125),
            border_focused: Color::Rgb(250, 204, 21),
            status_bar: Color::Rgb(148, 155, 176),
            error_text: Color::Rgb(248, 113, 113),
            placeholder: Color::Rgb(100, 106, 125),

            background: Color::Rgb(24, 26, 32),
            foreground: Color::Rgb(220, 223, 228),
            selection,
            selection_fg: selection_fg_for(selection),

            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        let selection = Color::Rgb(199, 210, 254);
        Self {
            name: "light",
            primary: Color::Rgb(79, 70, 229),
            danger: Color::Rgb(185, 28, 28),
            warning: Color::Rgb(161, 98, 7),
            success: Color::Rgb(21, 128, 61),
            disabled: Color::Rgb(156, 163, 175),

            // Dark text and borders for contrast on a bright background
            title: Color::Rgb(55, 48, 163),
            border: Color::Rgb(107, 114, 128),
            border_focused: Color::Rgb(79, 70, 229),
            status_bar: Color::Rgb(75, 85, 99),
            error_text: Color::Rgb(185, 28, 28),
            placeholder: Color::Rgb(156, 163, 175),

            background: Color::Rgb(249, 250, 251),
            foreground: Color::Rgb(17, 24, 39),
            selection,
            selection_fg: selection_fg_for(selection),

            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Relative luminance (0.0 = black, 1.0 = white): 0.2126*R + 0.7152*G + 0.0722*B
fn luminance(color: Color) -> f32 {
    match color {
        Color::Rgb(r, g, b) => {
            let r = r as f32 / 255.0;
            let g = g as f32 / 255.0;
            let b = b as f32 / 255.0;
            0.2126 * r + 0.7152 * g + 0.0722 * b
        }
        Color::Black => 0.0,
        Color::White | Color::Gray => 0.75,
        Color::DarkGray => 0.25,
        _ => 0.5, // Mid-range for other ANSI colors
    }
}

fn selection_fg_for(selection: Color) -> Color {
    if luminance(selection) > 0.5 {
        Color::Black // Dark text on light selection
    } else {
        Color::White // Light text on dark selection
    }
}
