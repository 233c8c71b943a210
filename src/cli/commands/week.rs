use crate::cli::parser::{Commands, WeekAction};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::resolver::is_dangling;
use crate::core::template::TemplateLogic;
use crate::core::week::WeekLogic;
use crate::errors::AppResult;
use crate::models::template_choice::TemplateChoice;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{colorize_checkpoint, colorize_difference, colorize_optional};
use crate::utils::date::{is_today, is_weekend, parse_date_arg, shift_weeks, today};
use crate::utils::formatting::{bold, format_week_range};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_difference, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Week { action } = cmd else {
        return Ok(());
    };

    match action {
        WeekAction::Show { date, offset } => {
            let base = match date {
                Some(d) => parse_date_arg(d)?,
                None => today(),
            };
            let d = shift_weeks(base, offset.unwrap_or(0));

            let pool = super::open_store(cfg)?;
            let summary = Core::week_summary(&pool, d);
            let recorded = Core::load_week_days(&pool, d);

            let template_label = match &summary.choice {
                TemplateChoice::Named(n) if is_dangling(&pool, &summary.choice) => {
                    format!("{} (missing, default used)", n)
                }
                other => other.to_string(),
            };

            header(format!(
                "Week {} · {}",
                summary.week_id,
                format_week_range(summary.monday, summary.friday)
            ));
            println!("Template: {}\n", template_label);

            let mut table = Table::new(
                vec![
                    Column::left("Day"),
                    Column::left("Date"),
                    Column::left("Arrival"),
                    Column::left("Lunch out"),
                    Column::left("Lunch in"),
                    Column::left("Departure"),
                    Column::right("Worked"),
                    Column::right("Planned"),
                    Column::right("Diff"),
                ],
                &cfg.separator_char,
            );

            for ds in &summary.stats.days {
                let schedule = recorded
                    .get(&ds.date)
                    .map(|r| r.schedule.clone())
                    .unwrap_or_default();

                let date_cell = ds.date.format("%Y-%m-%d").to_string();
                let date_cell = if is_today(ds.date) {
                    bold(&date_cell)
                } else {
                    date_cell
                };

                let diff_cell = if ds.recorded {
                    colorize_difference(&format_difference(ds.difference), ds.difference)
                } else {
                    colorize_optional("-")
                };

                table.add_row(vec![
                    ds.weekday.label().to_string(),
                    date_cell,
                    colorize_checkpoint(&schedule.arrival),
                    colorize_checkpoint(&schedule.lunch_out),
                    colorize_checkpoint(&schedule.lunch_in),
                    colorize_checkpoint(&schedule.departure),
                    colorize_optional(&format_duration(ds.actual)),
                    format_duration(ds.expected),
                    diff_cell,
                ]);
            }

            print!("{}", table.render());

            let stats = &summary.stats;
            println!(
                "\n{} {} / {}   {} {}   {} {}/5",
                bold("Total:"),
                format_duration(stats.total_actual),
                format_duration(stats.total_expected),
                bold("Balance:"),
                colorize_difference(
                    &format_difference(stats.total_difference),
                    stats.total_difference
                ),
                bold("Days:"),
                stats.days_recorded
            );
        }

        WeekAction::Assign {
            template,
            default,
            date,
        } => {
            let d = match date {
                Some(d) => parse_date_arg(d)?,
                None => today(),
            };

            let choice = if *default {
                TemplateChoice::Default
            } else {
                TemplateLogic::choice_from_arg(template.as_deref())
            };

            let mut pool = super::open_store(cfg)?;
            let week_id = WeekLogic::assign(&mut pool, d, &choice)?;

            match choice {
                TemplateChoice::Default => {
                    success(format!("Week {} now uses the default template.", week_id))
                }
                TemplateChoice::Named(name) => {
                    success(format!("Week {} now uses template '{}'.", week_id, name))
                }
            }

            if is_weekend(d) {
                warning("The given date is a week-end day; its week was assigned anyway.");
            }
        }
    }

    Ok(())
}
