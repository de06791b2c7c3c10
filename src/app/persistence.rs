// SPDX-License-Identifier: MPL-2.0
//! Applies preference changes to the running app and writes them to disk.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::{self, ThemeMode};
use iced::Theme;
use unic_langid::LanguageIdentifier;

/// Writes the in-memory config to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// inspecting the in-memory config instead.
pub fn save_config(config: &Config) {
    if cfg!(test) {
        return;
    }

    match config::save(config) {
        Ok(()) => tracing::debug!("config saved"),
        Err(error) => tracing::error!(%error, "failed to save config"),
    }
}

/// Switches the theme, rebuilds the cached Iced theme and persists the choice.
pub fn apply_theme_mode(
    config: &mut Config,
    theme_mode: &mut ThemeMode,
    theme: &mut Theme,
    mode: ThemeMode,
) {
    if *theme_mode == mode && config.general.theme_mode == Some(mode) {
        return;
    }

    tracing::info!(%mode, "theme mode changed");
    *theme_mode = mode;
    *theme = theming::resolve(mode).to_iced_theme();
    config.general.theme_mode = Some(mode);
    save_config(config);
}

/// Applies the newly selected locale and persists it. Unknown locales leave
/// both the catalog and the config untouched.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, locale: LanguageIdentifier) {
    if !i18n.set_locale(locale.clone()) {
        return;
    }

    tracing::info!(%locale, "language changed");
    config.general.language = Some(locale.to_string());
    save_config(config);
}
