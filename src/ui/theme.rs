//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Border and gauge color of the focused slider.
    pub focus: Color,
    /// Unfilled part of a slider.
    pub track: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar background color.
    pub keymap_bg: Color,
    /// Cobweb staircase and time series line.
    pub trajectory: Color,
    /// Map curve line.
    pub curve: Color,
    /// Identity line.
    pub diagonal: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus: Color::Rgb(250, 189, 47),
                track: Color::Rgb(80, 73, 69),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_bg: Color::Rgb(40, 40, 40),
                trajectory: Color::Rgb(254, 128, 25),
                curve: Color::Rgb(131, 165, 152),
                diagonal: Color::Rgb(184, 187, 38),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus: Color::Rgb(181, 118, 20),
                track: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_bg: Color::Rgb(251, 245, 234),
                trajectory: Color::Rgb(175, 58, 3),
                curve: Color::Rgb(7, 102, 120),
                diagonal: Color::Rgb(121, 116, 14),
            },
        }
    }
}
