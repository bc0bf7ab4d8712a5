//! # Themes
//!
//! The site has three themes. Every theme-dependent presentation choice is
//! looked up once through [`Theme::tokens`] and passed down to components,
//! instead of each component branching on the theme itself.

pub mod background;
pub mod tokens;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub use background::{BackgroundKind, Point};
pub use tokens::{BlockStyles, CardVariant, StyleTokens};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Colorful,
}

impl Theme {
    /// Order of the buttons in the theme switch.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Colorful];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Colorful => "colorful",
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Colorful,
            Theme::Colorful => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Theme",
            Theme::Dark => "Dark Theme",
            Theme::Colorful => "Colorful Theme",
        }
    }

    /// Material Symbols icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "light_mode",
            Theme::Dark => "dark_mode",
            Theme::Colorful => "palette",
        }
    }

    pub fn aria_label(self) -> String {
        format!("Switch to {} theme", self.as_str())
    }

    pub fn tokens(self) -> &'static StyleTokens {
        match self {
            Theme::Light => &tokens::LIGHT,
            Theme::Dark => &tokens::DARK,
            Theme::Colorful => &tokens::COLORFUL,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light', 'dark' or 'colorful'")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "colorful" => Ok(Theme::Colorful),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}
