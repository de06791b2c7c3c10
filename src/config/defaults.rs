// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::ui::theming::ThemeMode;

// ==========================================================================
// General Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Theme mode used when the stored value is unrecognized.
pub const FALLBACK_THEME_MODE: ThemeMode = ThemeMode::Light;

// ==========================================================================
// Font Defaults
// ==========================================================================

/// File extensions the renderer can register as custom fonts.
pub const SUPPORTED_FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Upper bound on registered custom fonts.
pub const MAX_CUSTOM_FONTS: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_CUSTOM_FONTS > 0);
    assert!(!SUPPORTED_FONT_EXTENSIONS.is_empty());
};
