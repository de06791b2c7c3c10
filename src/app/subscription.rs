// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard shortcuts are routed here: `Ctrl+,` (`Cmd+,` on macOS)
//! opens the settings dialog and `Escape` cancels it.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Listens for the global keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                map_shortcut(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Maps a key press to its shortcut message, if any.
pub(crate) fn map_shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::EscapePressed),
        Key::Character(c) if c.as_str() == "," && modifiers.command() => {
            Some(Message::OpenSettings)
        }
        _ => None,
    }
}
