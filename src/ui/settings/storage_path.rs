// SPDX-License-Identifier: MPL-2.0
//! Storage location setting.
//!
//! Shows where application data lives and lets the user point it elsewhere.
//! The directory itself is never touched here.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Column, Row},
    Element, Length, Task,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct State {
    default_path: Option<PathBuf>,
    override_path: Option<PathBuf>,
    picker_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChangeRequested,
    Picked(Option<PathBuf>),
    ResetRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// New override to persist; `None` restores the default location.
    Changed(Option<PathBuf>),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new(default_path: Option<PathBuf>, override_path: Option<PathBuf>) -> Self {
        Self {
            default_path,
            override_path,
            picker_open: false,
        }
    }

    /// The override when set, the platform default otherwise.
    pub fn effective_path(&self) -> Option<&Path> {
        self.override_path
            .as_deref()
            .or(self.default_path.as_deref())
    }

    pub fn is_default(&self) -> bool {
        self.override_path.is_none()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::ChangeRequested => {
                if self.picker_open {
                    return (Event::None, Task::none());
                }
                self.picker_open = true;
                (Event::None, pick_folder(self.effective_path()))
            }
            Message::Picked(path) => {
                self.picker_open = false;
                match path {
                    // Choosing the default directory is a reset, not an override.
                    Some(path) if self.default_path.as_ref() == Some(&path) => {
                        self.update(Message::ResetRequested)
                    }
                    Some(path) if self.override_path.as_ref() != Some(&path) => {
                        tracing::info!(path = %path.display(), "storage path changed");
                        self.override_path = Some(path.clone());
                        (Event::Changed(Some(path)), Task::none())
                    }
                    _ => (Event::None, Task::none()),
                }
            }
            Message::ResetRequested => {
                if self.override_path.take().is_some() {
                    tracing::info!("storage path reset to default");
                    (Event::Changed(None), Task::none())
                } else {
                    (Event::None, Task::none())
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let path_text = match self.effective_path() {
            Some(path) => text(path.display().to_string()).size(typography::BODY),
            None => text(i18n.tr("storage-path-unavailable"))
                .size(typography::BODY)
                .color(palette::ERROR_500),
        };

        let mut path_row = Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::XS)
            .push(path_text);
        if self.is_default() {
            path_row = path_row.push(
                text(format!("({})", i18n.tr("storage-path-default-badge")))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        let change_button = button(text(i18n.tr("storage-path-change-button")).size(typography::BODY))
            .style(styles::button::selected)
            .padding([spacing::XXS, spacing::MD])
            .on_press_maybe((!self.picker_open).then_some(Message::ChangeRequested));

        let reset_button = button(text(i18n.tr("storage-path-reset-button")).size(typography::BODY))
            .style(styles::button::unselected)
            .padding([spacing::XXS, spacing::MD])
            .on_press_maybe((!self.is_default()).then_some(Message::ResetRequested));

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(text(i18n.tr("storage-path-label")).size(typography::BODY_LG))
            .push(
                container(path_row)
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::container::value_box),
            )
            .push(
                text(i18n.tr("storage-path-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(change_button)
                    .push(reset_button),
            )
            .into()
    }
}

fn pick_folder(start: Option<&Path>) -> Task<Message> {
    let start = start.map(Path::to_path_buf);
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            if let Some(dir) = start {
                dialog = dialog.set_directory(&dir);
            }
            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::Picked,
    )
}
