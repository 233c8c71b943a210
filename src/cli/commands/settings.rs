use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsLogic, SettingsUpdate};
use crate::errors::AppResult;
use crate::models::settings::{Settings, Theme};
use crate::ui::messages::{detail, header, success};

fn print_settings(settings: &Settings) {
    header("Settings");
    detail("theme", settings.theme);
    detail("auto-save", settings.auto_save);
    detail("step", format!("{} min", settings.step_minutes));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        theme,
        auto_save,
        step,
    } = cmd
    {
        let mut pool = super::open_store(cfg)?;

        let update = SettingsUpdate {
            theme: theme.as_deref().map(str::parse::<Theme>).transpose()?,
            auto_save: *auto_save,
            step_minutes: *step,
        };

        // without any change, print
        if update.is_empty() {
            print_settings(&SettingsLogic::current(&pool));
            return Ok(());
        }

        let settings = SettingsLogic::update(&mut pool, &update)?;
        success("Settings updated.");
        if *print {
            print_settings(&settings);
        }
    }

    Ok(())
}
