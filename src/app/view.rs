// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The main screen is always rendered; the settings dialog is layered on top
//! of it through the modal overlay while the visibility flag is set.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::platform::Platform;
use crate::ui::components::modal;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::settings::{self, State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment,
    widget::{button, center, Column, Text},
    Element,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a SettingsState,
    pub settings_visible: bool,
    pub theme_mode: ThemeMode,
    pub platform: Platform,
}

/// Renders the main screen plus, when visible, the settings dialog.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = view_main(ctx.i18n);

    let dialog = ctx
        .settings
        .view(SettingsViewContext {
            i18n: ctx.i18n,
            visible: ctx.settings_visible,
            theme_mode: ctx.theme_mode,
            platform: ctx.platform,
        })
        .map(|element| element.map(Message::Settings));

    modal::overlay(base, dialog, backdrop_dismiss())
}

/// Message sent when the backdrop around the dialog is clicked.
pub(super) fn backdrop_dismiss() -> Message {
    Message::Settings(settings::Message::CancelRequested)
}

fn view_main(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("main-title")).size(typography::TITLE_LG);

    let subtitle = Text::new(i18n.tr("main-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("open-settings-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::selected)
        .on_press(Message::OpenSettings);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    center(content).into()
}
