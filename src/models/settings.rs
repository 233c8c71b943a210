use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        };
        f.write_str(s)
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            _ => Err(AppError::InvalidSetting(format!(
                "theme '{s}' (expected light, dark or auto)"
            ))),
        }
    }
}

/// Allowed entry steps, in minutes.
pub const STEP_CHOICES: [u32; 4] = [1, 5, 10, 15];

/// User preferences carried in the store and in export documents.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(rename = "sauvegardeAuto", alias = "auto_save", default = "default_auto_save")]
    pub auto_save: bool,
    #[serde(rename = "pasMinutes", alias = "step_minutes", default = "default_step")]
    pub step_minutes: u32,
}

fn default_auto_save() -> bool {
    true
}
fn default_step() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            auto_save: default_auto_save(),
            step_minutes: default_step(),
        }
    }
}
