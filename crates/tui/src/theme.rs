//! Token to terminal color resolution.

use folio_protocol::{ThemeMode, ThemeToken};
use ratatui::style::Color;

/// Resolve a semantic token for the active palette.
///
/// Keep in sync with the hex palette in `folio_core::html`. AccentSoft
/// is pre-blended against the background since cells have no alpha.
pub fn resolve(token: ThemeToken, mode: ThemeMode) -> Color {
    if mode.is_dark() {
        match token {
            ThemeToken::Background => Color::Rgb(17, 24, 39),
            ThemeToken::Surface => Color::Rgb(31, 41, 55),
            ThemeToken::Border => Color::Rgb(55, 65, 81),
            ThemeToken::Rule => Color::Rgb(156, 163, 175),
            ThemeToken::TextPrimary => Color::Rgb(243, 244, 246),
            ThemeToken::TextSecondary => Color::Rgb(209, 213, 219),
            ThemeToken::TextMuted => Color::Rgb(156, 163, 175),
            ThemeToken::Accent => Color::Rgb(74, 222, 128),
            ThemeToken::AccentSoft => Color::Rgb(23, 44, 48),
        }
    } else {
        match token {
            ThemeToken::Background => Color::Rgb(249, 250, 251),
            ThemeToken::Surface => Color::Rgb(243, 244, 246),
            ThemeToken::Border => Color::Rgb(229, 231, 235),
            ThemeToken::Rule => Color::Rgb(156, 163, 175),
            ThemeToken::TextPrimary => Color::Rgb(17, 24, 39),
            ThemeToken::TextSecondary => Color::Rgb(31, 41, 55),
            ThemeToken::TextMuted => Color::Rgb(107, 114, 128),
            ThemeToken::Accent => Color::Rgb(74, 222, 128),
            ThemeToken::AccentSoft => Color::Rgb(232, 247, 239),
        }
    }
}
