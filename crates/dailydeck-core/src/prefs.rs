//! Theme and sidebar preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Viewport widths at or below this collapse the sidebar.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ValidationError::InvalidValue {
                field: "theme".into(),
                message: format!("expected 'dark' or 'light', got '{other}'"),
            }),
        }
    }
}

/// Whether the sidebar should be collapsed at `width_px`.
///
/// Narrow viewports always collapse; wider ones follow the saved choice.
pub fn sidebar_collapsed_for_width(width_px: u32, breakpoint_px: u32, saved: bool) -> bool {
    width_px <= breakpoint_px || saved
}
