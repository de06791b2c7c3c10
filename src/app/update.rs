// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Child components report what happened through events; the functions here
//! turn those events into state changes on the root and persistence calls.

use super::{persistence, Message};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use iced::{Task, Theme};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub theme: &'a mut Theme,
    pub settings_visible: &'a mut bool,
    pub settings: &'a mut SettingsState,
}

/// Shows the dialog. A no-op when it is already open.
pub fn handle_open_settings(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !*ctx.settings_visible {
        tracing::debug!("settings dialog opened");
        *ctx.settings_visible = true;
    }
    Task::none()
}

/// Escape only cancels while the dialog is on screen.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.settings_visible {
        handle_settings_message(ctx, settings::Message::CancelRequested)
    } else {
        Task::none()
    }
}

/// Handles settings component messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    let (event, task) = ctx.settings.update(message);
    let task = task.map(Message::Settings);

    match event {
        SettingsEvent::None => {}
        SettingsEvent::Cancel => {
            tracing::debug!("settings dialog cancelled");
            *ctx.settings_visible = false;
        }
        SettingsEvent::SetVisible(visible) => {
            *ctx.settings_visible = visible;
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            persistence::apply_theme_mode(ctx.config, ctx.theme_mode, ctx.theme, mode);
        }
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale);
        }
        SettingsEvent::FontsChanged(fonts) => {
            ctx.config.fonts.custom = fonts;
            persistence::save_config(ctx.config);
        }
        SettingsEvent::StoragePathChanged(path) => {
            ctx.config.storage.path = path;
            persistence::save_config(ctx.config);
        }
    }

    task
}
