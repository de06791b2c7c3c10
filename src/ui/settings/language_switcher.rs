// SPDX-License-Identifier: MPL-2.0
//! Language selection buttons, one per available catalog.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, text, Row},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Selected(LanguageIdentifier),
}

/// Button label for a locale: `Name (tag)` when the catalog names it,
/// the bare tag otherwise.
pub fn display_name(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let tag = locale.to_string();
    match i18n.lookup(&format!("language-name-{tag}")) {
        Some(name) => format!("{name} ({tag})"),
        None => tag,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_locale();

    ctx.i18n
        .available_locales()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            let style = if locale == current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(text(display_name(ctx.i18n, locale)).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XXS, spacing::MD])
                    .style(style)
                    .on_press(Message::Selected(locale.clone())),
            )
        })
        .wrap()
        .into()
}
