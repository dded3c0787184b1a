use serde::{Deserialize, Serialize};

/// Dark or light color scheme selection. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode. Applying this twice yields the original mode.
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Semantic color tokens resolved by the renderer's active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    /// Page background.
    Background,
    /// Raised panel background (project cards).
    Surface,
    /// Hairline separators.
    Border,
    /// The sidebar's vertical rule.
    Rule,
    /// Headings and the hero name.
    TextPrimary,
    /// Default body text.
    TextSecondary,
    /// Paragraphs, dates, the footer.
    TextMuted,
    /// The highlight color: section numbers, bullets, active nav, links.
    Accent,
    /// Translucent accent wash (call-to-action fill).
    AccentSoft,
}

impl ThemeToken {
    /// All tokens, for palette table export.
    pub const ALL: [ThemeToken; 9] = [
        ThemeToken::Background,
        ThemeToken::Surface,
        ThemeToken::Border,
        ThemeToken::Rule,
        ThemeToken::TextPrimary,
        ThemeToken::TextSecondary,
        ThemeToken::TextMuted,
        ThemeToken::Accent,
        ThemeToken::AccentSoft,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_involution() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap_or_default(),
            "\"dark\""
        );
        assert_eq!(
            serde_json::to_string(&ThemeMode::Light).unwrap_or_default(),
            "\"light\""
        );
    }
}
