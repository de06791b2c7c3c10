// SPDX-License-Identifier: MPL-2.0
//! Light/Dark toggle group.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{button, text, Row},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(ThemeMode),
}

/// Render one button per mode, the current one highlighted.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            let style = if mode == ctx.current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(text(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XXS, spacing::MD])
                    .style(style)
                    .on_press(Message::Selected(mode)),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_for_both_modes() {
        let i18n = I18n::default();
        for current in ThemeMode::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                current,
            });
        }
    }
}
