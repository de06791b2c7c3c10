// SPDX-License-Identifier: MPL-2.0
//! Host platform detection for platform-specific dialog chrome.

/// Operating system the application was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Lowercase platform name, as used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Other => "other",
        }
    }

    /// macOS puts window controls on the leading edge.
    #[must_use]
    pub fn close_button_leading(self) -> bool {
        matches!(self, Platform::MacOs)
    }
}
