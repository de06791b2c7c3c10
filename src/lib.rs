// SPDX-License-Identifier: MPL-2.0
//! `iced_settings` is a system settings dialog built with the Iced GUI framework.
//!
//! It provides a modal with theme, language, custom font and storage path
//! settings, internationalized with Fluent and persisted to a TOML file.

#![doc(html_root_url = "https://docs.rs/iced_settings/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod platform;
pub mod ui;
