// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Catalogs are embedded at
//! build time and may be overridden or extended from a directory at runtime.
//!
//! # Features
//!
//! - Locale detection from CLI, config or system settings
//! - Runtime language switching
//! - Fallback to the default locale, then to a caller-supplied literal

pub mod fluent;
