use crate::errors::{AppError, AppResult};
use crate::models::settings::{STEP_CHOICES, Settings, Theme};
use crate::store::{Store, audit_quiet};
use crate::ui::messages::warning;

/// Fields to change; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub auto_save: Option<bool>,
    pub step_minutes: Option<u32>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.auto_save.is_none() && self.step_minutes.is_none()
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Stored settings, defaults when none are stored or the store fails.
    pub fn current(store: &dyn Store) -> Settings {
        store
            .get_settings()
            .unwrap_or_else(|e| {
                warning(format!("Cannot read settings ({}), using defaults.", e));
                None
            })
            .unwrap_or_default()
    }

    pub fn update(store: &mut dyn Store, update: &SettingsUpdate) -> AppResult<Settings> {
        if let Some(step) = update.step_minutes
            && !STEP_CHOICES.contains(&step)
        {
            return Err(AppError::InvalidSetting(format!(
                "step {step} (expected one of 1, 5, 10, 15)"
            )));
        }

        let mut settings = store.get_settings()?.unwrap_or_default();
        if let Some(theme) = update.theme {
            settings.theme = theme;
        }
        if let Some(auto_save) = update.auto_save {
            settings.auto_save = auto_save;
        }
        if let Some(step) = update.step_minutes {
            settings.step_minutes = step;
        }

        store.put_settings(&settings)?;

        audit_quiet(
            &*store,
            "settings",
            "",
            &format!(
                "theme={} auto_save={} step={}",
                settings.theme, settings.auto_save, settings.step_minutes
            ),
        );

        Ok(settings)
    }
}
