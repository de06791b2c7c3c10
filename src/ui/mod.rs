// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`settings`] - System settings dialog and its delegated panes
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (modal overlay)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark mode and the theme configuration records

pub mod components;
pub mod design_tokens;
pub mod settings;
pub mod styles;
pub mod theming;
