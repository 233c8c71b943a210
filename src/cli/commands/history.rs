use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let limit = limit.unwrap_or(cfg.history_weeks);
        let pool = super::open_store(cfg)?;
        let weeks = Core::week_history(&pool, limit);

        if weeks.is_empty() {
            info("No recorded days yet.");
            return Ok(());
        }

        header(format!("Last {} week(s)", weeks.len()));

        let mut table = Table::new(
            vec![
                Column::left("Week"),
                Column::left("From"),
                Column::right("Days"),
                Column::right("Worked"),
            ],
            &cfg.separator_char,
        );

        for w in weeks {
            table.add_row(vec![
                w.week_id.to_string(),
                w.monday.format("%Y-%m-%d").to_string(),
                w.days_recorded.to_string(),
                format_duration(w.total_minutes),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
