// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the main screen and the
//! settings dialog.
//!
//! The `App` struct owns the preferences (theme, locale, fonts, storage path),
//! the dialog visibility flag and the dialog state. Child components report
//! changes as events; the root applies them and persists the config.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::platform::Platform;
use crate::ui::settings::{self, fonts, storage_path, State as SettingsState};
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the settings dialog,
/// localization and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    /// Iced theme built from the resolved record for `theme_mode`.
    theme: Theme,
    settings_visible: bool,
    settings: SettingsState,
    platform: Platform,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("locale", &self.i18n.current_locale().to_string())
            .field("settings_visible", &self.settings_visible)
            .field("active_tab", &self.settings.active_tab())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 840;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(%key, "starting with default configuration");
    }
    let theme_mode = config.effective_theme_mode();
    let font_size = theming::resolve(theme_mode).tokens.font_size;

    // iced 0.14 requires a `Fn` boot; the state is consumed on the first call.
    let boot_state = RefCell::new(Some((flags, config, theme_mode)));
    let boot = move || {
        let (flags, config, theme_mode) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config, theme_mode)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .settings(iced::Settings {
            default_text_size: font_size.into(),
            ..iced::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            theme: theming::resolve(ThemeMode::default()).to_iced_theme(),
            settings_visible: false,
            settings: SettingsState::default(),
            platform: Platform::current(),
        }
    }
}

impl App {
    /// Builds the root state from the loaded config and registers the
    /// configured custom fonts with the renderer.
    fn new(flags: Flags, config: Config, theme_mode: ThemeMode) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let fonts = fonts::State::new(config.fonts.custom.clone());
        let storage =
            storage_path::State::new(paths::get_app_data_dir(), config.storage.path.clone());
        let dialog = SettingsState::new(fonts, storage);

        let task = dialog
            .fonts()
            .load_all()
            .map(|message| Message::Settings(settings::Message::Fonts(message)));

        tracing::info!(
            locale = %i18n.current_locale(),
            theme = %theme_mode,
            platform = Platform::current().name(),
            "application started"
        );

        let app = App {
            i18n,
            config,
            theme_mode,
            theme: theming::resolve(theme_mode).to_iced_theme(),
            settings_visible: false,
            settings: dialog,
            platform: Platform::current(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            theme: &mut self.theme,
            settings_visible: &mut self.settings_visible,
            settings: &mut self.settings,
        };

        match message {
            Message::OpenSettings => update::handle_open_settings(&mut ctx),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            settings: &self.settings,
            settings_visible: self.settings_visible,
            theme_mode: self.theme_mode,
            platform: self.platform,
        })
    }
}
