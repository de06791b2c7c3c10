// SPDX-License-Identifier: MPL-2.0
use iced_settings::config::{self, Config, CustomFont, GeneralConfig};
use iced_settings::i18n::fluent::I18n;
use iced_settings::platform::Platform;
use iced_settings::ui::settings::{self, fonts, storage_path, tabs, Event, State, Tab};
use iced_settings::ui::theming::{self, ThemeMode, DARK_THEME, LIGHT_THEME};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
            theme_mode: Some(ThemeMode::Light),
        },
        ..Config::default()
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en-US"), &config_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config::save_to_path(&config_with_language("fr"), &config_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let i18n = I18n::new(Some("zh-CN".into()), None, &config_with_language("fr"));
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");
}

#[test]
fn test_full_config_round_trip_with_override_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let config = Config {
        general: GeneralConfig {
            language: Some("fr".into()),
            theme_mode: Some(ThemeMode::Dark),
        },
        fonts: config::FontsConfig {
            custom: vec![CustomFont::from_path(Path::new("/fonts/FiraCode.ttf"))
                .expect("valid font path")],
        },
        storage: config::StorageConfig {
            path: Some(PathBuf::from("/data/elsewhere")),
        },
    };

    config::save_with_override(&config, Some(base.clone())).expect("Failed to save");
    let (loaded, warning) = config::load_with_override(Some(base));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn test_corrupted_config_yields_defaults_and_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_WARNING));
}

#[test]
fn test_unknown_theme_in_file_falls_back_to_light() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general]\ntheme_mode = \"solarized\"\n").expect("write");

    let loaded = config::load_from_path(&path).expect("lenient load");
    assert_eq!(loaded.general.theme_mode, Some(ThemeMode::Light));
}

#[test]
fn test_non_string_theme_in_file_keeps_other_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\ntheme_mode = 1\n\n[storage]\npath = \"/x\"\n",
    )
    .expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    assert_eq!(loaded.general.theme_mode, Some(ThemeMode::Light));
    assert_eq!(loaded.storage.path, Some(PathBuf::from("/x")));
}

#[test]
fn test_resolver_is_total_and_stable() {
    assert!(std::ptr::eq(theming::resolve_token("dark"), &DARK_THEME));
    for token in ["light", "", "DARK", "auto", "dark "] {
        assert!(std::ptr::eq(theming::resolve_token(token), &LIGHT_THEME));
    }
    assert!(std::ptr::eq(
        theming::resolve(ThemeMode::Dark),
        theming::resolve(ThemeMode::Dark)
    ));
}

#[test]
fn test_dialog_visibility_and_tabs() {
    let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
    let state = State::default();

    let hidden = state.view(settings::ViewContext {
        i18n: &i18n,
        visible: false,
        theme_mode: ThemeMode::Light,
        platform: Platform::current(),
    });
    assert!(hidden.is_none());

    let shown = state.view(settings::ViewContext {
        i18n: &i18n,
        visible: true,
        theme_mode: ThemeMode::Dark,
        platform: Platform::current(),
    });
    assert!(shown.is_some());

    let entries = tabs(&i18n);
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries.iter().map(|entry| entry.tab).collect::<Vec<_>>(),
        Tab::ALL
    );
    assert_eq!(entries[0].label, "Appearance");
}

#[test]
fn test_cancel_is_reported_once_per_interaction() {
    let mut state = State::default();
    let (first, _) = state.update(settings::Message::CancelRequested);
    let (second, _) = state.update(settings::Message::TabSelected(Tab::StoragePath));

    assert_eq!(first, Event::Cancel);
    assert_eq!(second, Event::None);
}

#[test]
fn test_font_picker_round_trip_through_dialog() {
    let mut state = State::new(fonts::State::default(), storage_path::State::default());

    let (event, _) = state.update(settings::Message::Fonts(fonts::Message::AddRequested));
    assert_eq!(event, Event::SetVisible(false));

    let (event, _) = state.update(settings::Message::Fonts(fonts::Message::Picked(Some(vec![
        PathBuf::from("/fonts/Inter.otf"),
        PathBuf::from("/fonts/Inter.otf"),
        PathBuf::from("/fonts/cover.png"),
    ]))));
    match event {
        Event::FontsChanged(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].name, "Inter");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let (event, _) = state.update(settings::Message::Fonts(fonts::Message::PickerClosed));
    assert_eq!(event, Event::SetVisible(true));
}

#[test]
fn test_storage_override_and_reset() {
    let default = PathBuf::from("/data/default");
    let mut state = State::new(
        fonts::State::default(),
        storage_path::State::new(Some(default.clone()), None),
    );

    let chosen = PathBuf::from("/data/elsewhere");
    let (event, _) = state.update(settings::Message::StoragePath(
        storage_path::Message::Picked(Some(chosen.clone())),
    ));
    assert_eq!(event, Event::StoragePathChanged(Some(chosen.clone())));
    assert_eq!(state.storage().effective_path(), Some(chosen.as_path()));

    let (event, _) = state.update(settings::Message::StoragePath(
        storage_path::Message::ResetRequested,
    ));
    assert_eq!(event, Event::StoragePathChanged(None));
    assert_eq!(state.storage().effective_path(), Some(default.as_path()));
}
