// SPDX-License-Identifier: MPL-2.0
//! Custom fonts manager.
//!
//! Keeps the list of user-registered font files, registers them with the
//! renderer and owns the native picker used to add new ones. The settings
//! dialog is hidden while the picker is open.

use crate::config::{CustomFont, MAX_CUSTOM_FONTS, SUPPORTED_FONT_EXTENSIONS};
use crate::error::FontError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, scrollable, text, Column, Row, Space},
    Element, Length, Task,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct State {
    fonts: Vec<CustomFont>,
    picker_open: bool,
    last_error: Option<FontError>,
}

#[derive(Debug, Clone)]
pub enum Message {
    AddRequested,
    Picked(Option<Vec<PathBuf>>),
    PickerClosed,
    Remove(usize),
    Loaded {
        name: String,
        result: Result<(), String>,
    },
}

/// Events propagated to the settings dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Show or hide the settings dialog.
    SetSettingsVisible(bool),
    /// The registered list changed and should be persisted.
    FontsChanged(Vec<CustomFont>),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new(fonts: Vec<CustomFont>) -> Self {
        Self {
            fonts,
            ..Self::default()
        }
    }

    pub fn fonts(&self) -> &[CustomFont] {
        &self.fonts
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn last_error(&self) -> Option<&FontError> {
        self.last_error.as_ref()
    }

    /// Validates and registers a font file.
    pub fn add(&mut self, path: &Path) -> Result<CustomFont, FontError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !SUPPORTED_FONT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(FontError::UnsupportedFormat(extension));
        }
        if self.fonts.iter().any(|font| font.path == path) {
            return Err(FontError::AlreadyRegistered);
        }
        if self.fonts.len() >= MAX_CUSTOM_FONTS {
            return Err(FontError::LimitReached);
        }
        let font = CustomFont::from_path(path)
            .ok_or_else(|| FontError::UnsupportedFormat(path.display().to_string()))?;
        self.fonts.push(font.clone());
        Ok(font)
    }

    /// Removes the font at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<CustomFont> {
        (index < self.fonts.len()).then(|| self.fonts.remove(index))
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::AddRequested => {
                if self.picker_open {
                    return (Event::None, Task::none());
                }
                self.picker_open = true;
                self.last_error = None;
                (Event::SetSettingsVisible(false), pick_fonts())
            }
            Message::Picked(paths) => {
                let mut tasks = Vec::new();
                for path in paths.unwrap_or_default() {
                    match self.add(&path) {
                        Ok(font) => {
                            tracing::info!(name = %font.name, "custom font added");
                            tasks.push(load_font(&font));
                        }
                        Err(error) => {
                            tracing::warn!(path = %path.display(), %error, "custom font rejected");
                            self.last_error = Some(error);
                        }
                    }
                }
                let event = if tasks.is_empty() {
                    Event::None
                } else {
                    Event::FontsChanged(self.fonts.clone())
                };
                tasks.push(Task::done(Message::PickerClosed));
                (event, Task::batch(tasks))
            }
            Message::PickerClosed => {
                self.picker_open = false;
                (Event::SetSettingsVisible(true), Task::none())
            }
            Message::Remove(index) => match self.remove(index) {
                Some(font) => {
                    tracing::info!(name = %font.name, "custom font removed");
                    (Event::FontsChanged(self.fonts.clone()), Task::none())
                }
                None => (Event::None, Task::none()),
            },
            Message::Loaded { name, result } => {
                if let Err(error) = result {
                    tracing::warn!(%name, %error, "failed to register custom font");
                    self.last_error = Some(FontError::LoadFailed(error));
                } else {
                    tracing::debug!(%name, "custom font registered");
                }
                (Event::None, Task::none())
            }
        }
    }

    /// Registers every known font with the renderer, used at startup.
    pub fn load_all(&self) -> Task<Message> {
        Task::batch(self.fonts.iter().map(load_font))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let list: Element<'a, Message> = if self.fonts.is_empty() {
            text(i18n.tr("fonts-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into()
        } else {
            let rows = self
                .fonts
                .iter()
                .enumerate()
                .fold(Column::new().spacing(spacing::XS), |column, (index, font)| {
                    column.push(font_row(i18n, index, font))
                });
            scrollable(rows).height(Length::Fill).into()
        };

        let add_button = button(text(i18n.tr("fonts-add-button")).size(typography::BODY))
            .style(styles::button::selected)
            .padding([spacing::XXS, spacing::MD])
            .on_press_maybe((!self.picker_open).then_some(Message::AddRequested));

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(
                Row::new()
                    .align_y(Vertical::Center)
                    .spacing(spacing::SM)
                    .push(add_button)
                    .push(
                        text(i18n.tr("fonts-hint"))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                    ),
            );

        if let Some(error) = &self.last_error {
            content = content.push(
                text(i18n.tr(error.i18n_key()))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        content.push(list).into()
    }
}

fn font_row<'a>(i18n: &'a I18n, index: usize, font: &'a CustomFont) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(text(&font.name).size(typography::BODY))
        .push(
            text(font.path.display().to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    container(
        Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::SM)
            .push(details)
            .push(Space::new().width(Length::Fill))
            .push(
                button(text(i18n.tr("fonts-remove-button")).size(typography::CAPTION))
                    .style(styles::button::unselected)
                    .on_press(Message::Remove(index)),
            ),
    )
    .padding(spacing::XS)
    .style(styles::container::value_box)
    .into()
}

fn pick_fonts() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Fonts", &SUPPORTED_FONT_EXTENSIONS[..])
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::Picked,
    )
}

/// Reads the font file off the UI thread, then hands the bytes to the renderer.
fn load_font(font: &CustomFont) -> Task<Message> {
    let name = font.name.clone();
    let path = font.path.clone();

    Task::perform(read_font_bytes(path), std::convert::identity).then(move |read| {
        let name = name.clone();
        match read {
            Ok(bytes) => iced::font::load(bytes).map(move |result| Message::Loaded {
                name: name.clone(),
                result: result.map_err(|error| format!("{error:?}")),
            }),
            Err(error) => Task::done(Message::Loaded {
                name,
                result: Err(error),
            }),
        }
    })
}

async fn read_font_bytes(path: PathBuf) -> Result<Vec<u8>, String> {
    tokio::fs::read(&path)
        .await
        .map_err(|error| format!("{}: {error}", path.display()))
}
