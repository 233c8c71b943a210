use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Editor to use: explicit choice, then $EDITOR / $VISUAL, then the
    /// platform default.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(requested),
            _ if requested == default_editor => {
                return Err(AppError::Config(format!(
                    "Failed to edit configuration file using '{}'",
                    requested
                )));
            }
            _ => {}
        }

        // Fallback
        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => Ok(default_editor),
            _ => Err(AppError::Config(format!(
                "Editor '{}' not available and fallback '{}' failed",
                requested, default_editor
            ))),
        }
    }
}
