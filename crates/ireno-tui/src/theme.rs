//! Color palettes derived from the theme setting.
//!
//! `Auto` leans on the terminal's own colors so the dashboard inherits
//! whatever scheme the user runs; `Light` and `Dark` pin explicit
//! foreground/background pairs.

use ireno_core::settings::Theme;
use ratatui::style::Color;

/// Resolved colors for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    /// User chat messages.
    pub user: Color,
    /// Assistant chat messages.
    pub assistant: Color,
}

/// Returns the palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Auto => Palette {
            fg: Color::Reset,
            bg: Color::Reset,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            user: Color::Cyan,
            assistant: Color::Green,
        },
        Theme::Light => Palette {
            fg: Color::Black,
            bg: Color::White,
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            info: Color::Blue,
            user: Color::Blue,
            assistant: Color::Rgb(0, 110, 60),
        },
        Theme::Dark => Palette {
            fg: Color::White,
            bg: Color::Black,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            info: Color::LightBlue,
            user: Color::LightCyan,
            assistant: Color::LightGreen,
        },
    }
}
