// SPDX-License-Identifier: MPL-2.0
//! System settings dialog.
//!
//! A modal with a vertical tab bar and three panes: appearance (theme and
//! language), custom fonts and storage path. The dialog does not own its
//! visibility: the parent passes the flag in through [`ViewContext`] and
//! reacts to [`Event::Cancel`] and [`Event::SetVisible`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_settings::i18n::fluent::I18n;
//! use iced_settings::platform::Platform;
//! use iced_settings::ui::settings::{self, State, ViewContext};
//! use iced_settings::ui::theming::ThemeMode;
//!
//! let i18n = I18n::default();
//! let state = State::default();
//! let dialog = state.view(ViewContext {
//!     i18n: &i18n,
//!     visible: true,
//!     theme_mode: ThemeMode::Light,
//!     platform: Platform::current(),
//! });
//! assert!(dialog.is_some());
//! ```

pub mod fonts;
pub mod language_switcher;
pub mod storage_path;
pub mod theme_switcher;

use crate::config::CustomFont;
use crate::i18n::fluent::I18n;
use crate::platform::Platform;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, rule, text, Column, Container, Row, Space},
    Element, Length, Task,
};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Tabs of the dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Appearance,
    CustomFonts,
    StoragePath,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Appearance, Tab::CustomFonts, Tab::StoragePath];

    /// Stable identifier of the tab.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Tab::Appearance => "appearance",
            Tab::CustomFonts => "custom_fonts",
            Tab::StoragePath => "storage_path",
        }
    }

    fn i18n_key(self) -> &'static str {
        match self {
            Tab::Appearance => "settings-tab-appearance",
            Tab::CustomFonts => "settings-tab-custom-fonts",
            Tab::StoragePath => "settings-tab-storage-path",
        }
    }

    fn fallback_label(self) -> &'static str {
        match self {
            Tab::Appearance => "Appearance",
            Tab::CustomFonts => "Custom fonts",
            Tab::StoragePath => "Storage path",
        }
    }

    /// Localized label, or the English literal when no translation exists.
    pub fn label(self, i18n: &I18n) -> String {
        i18n.tr_or(self.i18n_key(), self.fallback_label())
    }
}

/// A labelled entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub tab: Tab,
    pub key: &'static str,
    pub label: String,
}

/// Entries of the tab bar, in display order.
pub fn tabs(i18n: &I18n) -> Vec<TabEntry> {
    Tab::ALL
        .iter()
        .map(|&tab| TabEntry {
            tab,
            key: tab.key(),
            label: tab.label(i18n),
        })
        .collect()
}

/// Dialog state: the active tab plus the state of the delegated panes.
#[derive(Debug, Clone, Default)]
pub struct State {
    active_tab: Tab,
    fonts: fonts::State,
    storage: storage_path::State,
}

/// Values the parent threads into the dialog on every render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visible: bool,
    pub theme_mode: ThemeMode,
    pub platform: Platform,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    /// Close button, backdrop click or Escape.
    CancelRequested,
    ThemeSwitcher(theme_switcher::Message),
    LanguageSwitcher(language_switcher::Message),
    Fonts(fonts::Message),
    StoragePath(storage_path::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user dismissed the dialog.
    Cancel,
    /// Set the parent's "settings visible" flag.
    SetVisible(bool),
    ThemeModeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    FontsChanged(Vec<CustomFont>),
    StoragePathChanged(Option<PathBuf>),
}

impl State {
    #[must_use]
    pub fn new(fonts: fonts::State, storage: storage_path::State) -> Self {
        Self {
            active_tab: Tab::default(),
            fonts,
            storage,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn fonts(&self) -> &fonts::State {
        &self.fonts
    }

    pub fn storage(&self) -> &storage_path::State {
        &self.storage
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::TabSelected(tab) => {
                self.select_tab(tab);
                (Event::None, Task::none())
            }
            Message::CancelRequested => (Event::Cancel, Task::none()),
            Message::ThemeSwitcher(theme_switcher::Message::Selected(mode)) => {
                (Event::ThemeModeSelected(mode), Task::none())
            }
            Message::LanguageSwitcher(language_switcher::Message::Selected(locale)) => {
                (Event::LanguageSelected(locale), Task::none())
            }
            Message::Fonts(message) => {
                let (event, task) = self.fonts.update(message);
                let event = match event {
                    fonts::Event::None => Event::None,
                    fonts::Event::SetSettingsVisible(visible) => Event::SetVisible(visible),
                    fonts::Event::FontsChanged(list) => Event::FontsChanged(list),
                };
                (event, task.map(Message::Fonts))
            }
            Message::StoragePath(message) => {
                let (event, task) = self.storage.update(message);
                let event = match event {
                    storage_path::Event::None => Event::None,
                    storage_path::Event::Changed(path) => Event::StoragePathChanged(path),
                };
                (event, task.map(Message::StoragePath))
            }
        }
    }

    /// Renders the modal panel, or nothing while the dialog is hidden.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        if !ctx.visible {
            return None;
        }

        let header = view_header(ctx.i18n, ctx.platform);

        let tab_bar = tabs(ctx.i18n).into_iter().fold(
            Column::new().spacing(spacing::XXS).padding(spacing::XS),
            |column, entry| {
                let active = entry.tab == self.active_tab;
                column.push(
                    button(text(entry.label).size(typography::BODY))
                        .width(Length::Fill)
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::tab(active))
                        .on_press(Message::TabSelected(entry.tab)),
                )
            },
        );

        let pane: Element<'a, Message> = match self.active_tab {
            Tab::Appearance => view_appearance(ctx.i18n, ctx.theme_mode),
            Tab::CustomFonts => self
                .fonts
                .view(fonts::ViewContext { i18n: ctx.i18n })
                .map(Message::Fonts),
            Tab::StoragePath => self
                .storage
                .view(storage_path::ViewContext { i18n: ctx.i18n })
                .map(Message::StoragePath),
        };

        let body = Row::new()
            .spacing(spacing::MD)
            .height(Length::Fill)
            .push(
                container(tab_bar)
                    .width(Length::Fixed(sizing::TAB_BAR_WIDTH))
                    .height(Length::Fill)
                    .style(styles::container::tab_bar),
            )
            .push(container(pane).width(Length::Fill).height(Length::Fill));

        let panel = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(header)
                .push(rule::horizontal(1))
                .push(body),
        )
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .height(Length::Fixed(sizing::MODAL_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::modal);

        Some(panel.into())
    }
}

fn view_header<'a>(i18n: &'a I18n, platform: Platform) -> Element<'a, Message> {
    let title = text(i18n.tr_or("settings-title", "Settings")).size(typography::TITLE_MD);
    let close = button(text("✕").size(typography::BODY_LG))
        .style(styles::button::ghost)
        .padding([spacing::XXS, spacing::XS])
        .on_press(Message::CancelRequested);

    let row = Row::new().align_y(Vertical::Center).spacing(spacing::SM);
    if platform.close_button_leading() {
        row.push(close).push(title).into()
    } else {
        row.push(title)
            .push(Space::new().width(Length::Fill))
            .push(close)
            .into()
    }
}

fn view_appearance<'a>(i18n: &'a I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let field = |label: String, control: Element<'a, Message>| {
        Column::new()
            .spacing(spacing::XS)
            .push(text(label).size(typography::BODY_LG))
            .push(control)
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(field(
            i18n.tr_or("settings-theme-label", "Theme"),
            theme_switcher::view(theme_switcher::ViewContext {
                i18n,
                current: theme_mode,
            })
            .map(Message::ThemeSwitcher),
        ))
        .push(field(
            i18n.tr_or("settings-language-label", "Language"),
            language_switcher::view(language_switcher::ViewContext { i18n })
                .map(Message::LanguageSwitcher),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(i18n: &I18n, visible: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            visible,
            theme_mode: ThemeMode::Light,
            platform: Platform::current(),
        }
    }

    #[test]
    fn hidden_dialog_renders_nothing() {
        let i18n = I18n::default();
        let state = State::default();
        assert!(state.view(context(&i18n, false)).is_none());
    }

    #[test]
    fn visible_dialog_renders_one_modal_for_every_tab() {
        let i18n = I18n::default();
        let mut state = State::default();
        for tab in Tab::ALL {
            state.select_tab(tab);
            assert!(state.view(context(&i18n, true)).is_some());
        }
    }

    #[test]
    fn dialog_has_exactly_three_tabs_in_order() {
        let i18n = I18n::default();
        let keys: Vec<_> = tabs(&i18n).iter().map(|entry| entry.key).collect();
        assert_eq!(keys, ["appearance", "custom_fonts", "storage_path"]);
    }

    #[test]
    fn tab_labels_are_localized() {
        let i18n = I18n::new(Some("fr".into()), None, &crate::config::Config::default());
        let labels: Vec<_> = tabs(&i18n).into_iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            ["Apparence", "Polices personnalisées", "Emplacement de stockage"]
        );
    }

    #[test]
    fn default_tab_is_appearance() {
        assert_eq!(State::default().active_tab(), Tab::Appearance);
    }

    #[test]
    fn selecting_a_tab_changes_only_the_active_tab() {
        let mut state = State::default();
        let (event, _task) = state.update(Message::TabSelected(Tab::StoragePath));
        assert_eq!(event, Event::None);
        assert_eq!(state.active_tab(), Tab::StoragePath);
    }

    #[test]
    fn cancel_interaction_emits_cancel_once() {
        let mut state = State::default();
        let (event, _task) = state.update(Message::CancelRequested);
        assert_eq!(event, Event::Cancel);
        assert_eq!(state.active_tab(), Tab::Appearance);
    }

    #[test]
    fn switchers_forward_selection() {
        let mut state = State::default();
        let (event, _task) = state.update(Message::ThemeSwitcher(
            theme_switcher::Message::Selected(ThemeMode::Dark),
        ));
        assert_eq!(event, Event::ThemeModeSelected(ThemeMode::Dark));

        let fr: LanguageIdentifier = "fr".parse().unwrap();
        let (event, _task) = state.update(Message::LanguageSwitcher(
            language_switcher::Message::Selected(fr.clone()),
        ));
        assert_eq!(event, Event::LanguageSelected(fr));
    }

    #[test]
    fn fonts_pane_drives_visibility_setter() {
        let mut state = State::default();
        let (event, _task) = state.update(Message::Fonts(fonts::Message::AddRequested));
        assert_eq!(event, Event::SetVisible(false));

        let (event, _task) = state.update(Message::Fonts(fonts::Message::PickerClosed));
        assert_eq!(event, Event::SetVisible(true));
    }

    #[test]
    fn storage_pane_reports_new_path() {
        let mut state = State::default();
        let path = PathBuf::from("/data/custom");
        let (event, _task) = state.update(Message::StoragePath(storage_path::Message::Picked(
            Some(path.clone()),
        )));
        assert_eq!(event, Event::StoragePathChanged(Some(path)));
    }
}
