// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme mode and the static style records each mode maps to.
//!
//! The lookup is deliberately total: `dark` selects the dark record and every
//! other input, valid or not, selects the light one.

use crate::error::Error;
use crate::ui::design_tokens::{palette, typography};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Styling algorithm a record is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Light surfaces, dark text.
    Default,
    /// Dark surfaces, light text.
    Dark,
}

/// Visual tokens shared by the whole UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    pub font_size: f32,
    pub color_primary: Color,
}

/// Immutable bundle of an algorithm selector and its tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeConfig {
    pub algorithm: Algorithm,
    pub tokens: ThemeTokens,
}

const TOKENS: ThemeTokens = ThemeTokens {
    font_size: typography::BODY_SM,
    color_primary: palette::SKY_600,
};

/// Style record for [`ThemeMode::Light`].
pub static LIGHT_THEME: ThemeConfig = ThemeConfig {
    algorithm: Algorithm::Default,
    tokens: TOKENS,
};

/// Style record for [`ThemeMode::Dark`].
pub static DARK_THEME: ThemeConfig = ThemeConfig {
    algorithm: Algorithm::Dark,
    tokens: TOKENS,
};

impl ThemeConfig {
    /// Builds the Iced theme for this record: the algorithm picks the base
    /// palette, the primary token overrides its accent color.
    #[must_use]
    pub fn to_iced_theme(&self) -> Theme {
        let (name, base) = match self.algorithm {
            Algorithm::Default => ("Light", Theme::Light),
            Algorithm::Dark => ("Dark", Theme::Dark),
        };

        Theme::custom(
            name.to_string(),
            Palette {
                primary: self.tokens.color_primary,
                ..base.palette()
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes in display order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Lenient conversion: `"dark"` is dark, anything else is light.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Detects the OS preference. Anything but an explicit dark setting,
    /// detection errors included, yields light.
    #[must_use]
    pub fn from_system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the i18n key of the switcher label for this mode.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    /// Strict parsing for callers that need to know about bad input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::Config(format!("invalid theme_mode: {}", other))),
        }
    }
}

/// Returns the style record for a mode.
#[must_use]
pub fn resolve(mode: ThemeMode) -> &'static ThemeConfig {
    match mode {
        ThemeMode::Dark => &DARK_THEME,
        ThemeMode::Light => &LIGHT_THEME,
    }
}

/// Returns the style record for a raw mode token, falling back to light.
#[must_use]
pub fn resolve_token(token: &str) -> &'static ThemeConfig {
    resolve(ThemeMode::from_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_token_resolves_to_dark_record() {
        assert_eq!(resolve_token("dark").algorithm, Algorithm::Dark);
        assert!(std::ptr::eq(resolve_token("dark"), &DARK_THEME));
    }

    #[test]
    fn light_and_unknown_tokens_resolve_to_light_record() {
        for token in ["light", "", "Dark", "DARK", "system", "sepia", " dark"] {
            assert!(
                std::ptr::eq(resolve_token(token), &LIGHT_THEME),
                "token {token:?} should fall back to light"
            );
        }
    }

    #[test]
    fn records_are_referentially_stable() {
        let first = resolve(ThemeMode::Dark);
        let second = resolve(ThemeMode::Dark);
        assert!(std::ptr::eq(first, second));

        let first = resolve(ThemeMode::Light);
        let second = resolve_token("light");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn both_records_share_tokens() {
        assert_eq!(LIGHT_THEME.tokens, DARK_THEME.tokens);
        assert_eq!(LIGHT_THEME.tokens.font_size, 13.0);
        assert_ne!(LIGHT_THEME.algorithm, DARK_THEME.algorithm);
    }

    #[test]
    fn primary_token_is_sky_blue() {
        let primary = LIGHT_THEME.tokens.color_primary;
        assert!(primary.b > primary.g && primary.g > primary.r);
    }

    #[test]
    fn iced_theme_uses_primary_token() {
        let theme = DARK_THEME.to_iced_theme();
        assert_eq!(theme.palette().primary, DARK_THEME.tokens.color_primary);
        assert_eq!(theme.palette().background, Theme::Dark.palette().background);
    }

    #[test]
    fn strict_parse_rejects_unknown_mode() {
        assert_eq!("dark".parse::<ThemeMode>().ok(), Some(ThemeMode::Dark));
        assert!(matches!("system".parse::<ThemeMode>(), Err(Error::Config(_))));
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn system_detection_does_not_panic() {
        let _ = ThemeMode::from_system();
    }
}
