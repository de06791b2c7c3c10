// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Brand colors come from the active theme's primary color so the custom
//! primary token applies everywhere.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn darken(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r - amount).max(0.0),
        (color.g - amount).max(0.0),
        (color.b - amount).max(0.0),
    )
}

fn disabled_style(is_dark: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for primary actions and the selected entry of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let is_dark = theme.extended_palette().is_dark;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(brand)),
            text_color: WHITE,
            border: Border {
                color: darken(brand, 0.1),
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::SKY_500)),
            text_color: WHITE,
            border: Border {
                color: brand,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(is_dark),
    }
}

/// Style for secondary actions and unselected entries of a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            })),
            text_color,
            border: Border {
                color: theme.palette().primary,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(is_dark),
    }
}

/// Style for an entry of the vertical tab bar.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let brand = theme.palette().primary;

        let background = match (active, status) {
            (true, _) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..brand
            })),
            (false, button::Status::Hovered) => {
                Some(Background::Color(palette.background.weak.color))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color: if active {
                brand
            } else {
                palette.background.base.text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless style for the dialog close button.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette.background.weak.color))
            }
            _ => None,
        },
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::{DARK_THEME, LIGHT_THEME};

    #[test]
    fn selected_button_uses_theme_primary() {
        let theme = LIGHT_THEME.to_iced_theme();
        let style = selected(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, LIGHT_THEME.tokens.color_primary);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn unselected_button_adapts_to_dark_theme() {
        let light = unselected(&LIGHT_THEME.to_iced_theme(), button::Status::Active);
        let dark = unselected(&DARK_THEME.to_iced_theme(), button::Status::Active);
        assert_ne!(light.background, dark.background);
        assert_eq!(dark.text_color, WHITE);
    }

    #[test]
    fn active_tab_is_highlighted() {
        let theme = DARK_THEME.to_iced_theme();
        let active = tab(true)(&theme, button::Status::Active);
        let inactive = tab(false)(&theme, button::Status::Active);

        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
        assert_eq!(active.text_color, DARK_THEME.tokens.color_primary);
    }

    #[test]
    fn ghost_button_only_fills_on_hover() {
        let theme = LIGHT_THEME.to_iced_theme();
        assert!(ghost(&theme, button::Status::Active).background.is_none());
        assert!(ghost(&theme, button::Status::Hovered).background.is_some());
    }
}
