// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Font(FontError),
}

/// Reasons a custom font entry could not be added or registered.
/// Used to provide user-friendly, localized messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The file extension is not one the renderer can load.
    UnsupportedFormat(String),

    /// The same file is already registered.
    AlreadyRegistered,

    /// The list already holds the maximum number of fonts.
    LimitReached,

    /// The renderer rejected the font data.
    LoadFailed(String),
}

impl FontError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FontError::UnsupportedFormat(_) => "error-font-unsupported-format",
            FontError::AlreadyRegistered => "error-font-already-registered",
            FontError::LimitReached => "fonts-limit-reached",
            FontError::LoadFailed(_) => "error-font-load-failed",
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::UnsupportedFormat(ext) => write!(f, "Unsupported font format: {}", ext),
            FontError::AlreadyRegistered => write!(f, "Font is already registered"),
            FontError::LimitReached => write!(f, "Custom font limit reached"),
            FontError::LoadFailed(msg) => write!(f, "Font loading failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Font(e) => write!(f, "Font Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FontError> for Error {
    fn from(err: FontError) -> Self {
        Error::Font(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
