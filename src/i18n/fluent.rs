// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Prefix returned by [`I18n::tr`] for keys without a translation.
pub const MISSING_PREFIX: &str = "MISSING: ";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the catalog from the embedded `.ftl` files, plus any files in
    /// `i18n_dir`, which override embedded messages of the same locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, Vec<String>> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources
                    .entry(locale)
                    .or_default()
                    .push(String::from_utf8_lossy(content.data.as_ref()).into_owned());
            }
        }

        if let Some(dir) = i18n_dir.as_deref() {
            load_directory(Path::new(dir), &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, contents) in sources {
            bundles.insert(locale.clone(), build_bundle(&locale, contents));
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let os_locale = sys_locale::get_locale();
        let current_locale = resolve_locale(cli_lang, config, os_locale, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        tracing::debug!(locale = %current_locale, available = available_locales.len(), "i18n ready");

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    /// Switches the active locale. Returns `false` (and keeps the current one)
    /// when no catalog exists for `locale`.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            tracing::warn!(%locale, "no catalog for locale");
            false
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Translates `key`, or returns `MISSING: key`.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key)
            .unwrap_or_else(|| format!("{MISSING_PREFIX}{key}"))
    }

    /// Translates `key`, or returns `fallback` verbatim.
    pub fn tr_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Looks `key` up in the current locale, then in the default locale.
    pub fn lookup(&self, key: &str) -> Option<String> {
        format_message(self.bundles.get(&self.current_locale)?, key).or_else(|| {
            self.bundles
                .get(&self.default_locale)
                .and_then(|bundle| format_message(bundle, key))
        })
    }
}

fn format_message(bundle: &FluentBundle<FluentResource>, key: &str) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, None, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        tracing::warn!(key, ?errors, "failed to format message");
        None
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn load_directory(dir: &Path, sources: &mut HashMap<LanguageIdentifier, Vec<String>>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(dir = %dir.display(), %error, "cannot read i18n directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => sources.entry(locale).or_default().push(content),
            Err(error) => tracing::warn!(path = %path.display(), %error, "cannot read catalog"),
        }
    }
}

// Later sources override messages of earlier ones.
fn build_bundle(locale: &LanguageIdentifier, contents: Vec<String>) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);

    for content in contents {
        let resource = match FluentResource::try_new(content) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(%locale, ?errors, "catalog has syntax errors, keeping valid entries");
                resource
            }
        };
        bundle.add_resource_overriding(resource);
    }

    bundle
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(supported)
        .or_else(|| config.general.language.as_deref().and_then(supported))
        .or_else(|| os_locale.as_deref().and_then(supported))
}
