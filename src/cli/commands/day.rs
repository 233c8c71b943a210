use crate::cli::parser::{Commands, DayAction};
use crate::config::Config;
use crate::core::calculator::day::day_total;
use crate::core::day::DayLogic;
use crate::errors::AppResult;
use crate::models::day_schedule::DaySchedule;
use crate::ui::confirm::ask_confirmation;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{colorize_checkpoint, colorize_difference};
use crate::utils::date::{WeekId, parse_date_arg};
use crate::utils::formatting::format_date_long;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_difference, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { action } = cmd {
        match action {
            DayAction::Set { date, times } => {
                let d = parse_date_arg(date)?;
                let input = super::checkpoint_input(times)?;

                let mut pool = super::open_store(cfg)?;
                let day = DayLogic::save(&mut pool, d, &input)?;

                success(format!(
                    "{} recorded: {} ({})",
                    day.date_str(),
                    format_duration(day.total_minutes),
                    WeekId::of(d)
                ));
                print_schedule_row(&day.schedule, cfg);
            }

            DayAction::Show { date } => {
                let d = parse_date_arg(date)?;
                let pool = super::open_store(cfg)?;
                let view = DayLogic::show(&pool, d)?;

                header(format!("{} · {}", format_date_long(d), WeekId::of(d)));

                let mut table = Table::new(
                    vec![
                        Column::left(""),
                        Column::left("Arrival"),
                        Column::left("Lunch out"),
                        Column::left("Lunch in"),
                        Column::left("Departure"),
                        Column::right("Total"),
                    ],
                    &cfg.separator_char,
                );
                table.add_row(schedule_cells("Planned", &view.planned, view.expected));

                match &view.record {
                    Some(rec) => {
                        table.add_row(schedule_cells("Recorded", &rec.schedule, rec.total_minutes));
                        print!("{}", table.render());

                        let diff = rec.total_minutes - view.expected;
                        println!(
                            "\nDifference: {}",
                            colorize_difference(&format_difference(diff), diff)
                        );
                    }
                    None => {
                        print!("{}", table.render());
                        println!();
                        info("Nothing recorded for this day.");
                    }
                }
            }

            DayAction::Del { date, yes } => {
                let d = parse_date_arg(date)?;

                if !*yes
                    && !ask_confirmation(&format!(
                        "Delete the record of {}? This action is irreversible.",
                        d
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let mut pool = super::open_store(cfg)?;
                DayLogic::delete(&mut pool, d)?;
                success(format!("Record of {} has been deleted.", d));
            }
        }
    }

    Ok(())
}

fn schedule_cells(label: &str, s: &DaySchedule, total: i64) -> Vec<String> {
    vec![
        label.to_string(),
        colorize_checkpoint(&s.arrival),
        colorize_checkpoint(&s.lunch_out),
        colorize_checkpoint(&s.lunch_in),
        colorize_checkpoint(&s.departure),
        format_duration(total),
    ]
}

fn print_schedule_row(s: &DaySchedule, cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::left("Arrival"),
            Column::left("Lunch out"),
            Column::left("Lunch in"),
            Column::left("Departure"),
            Column::right("Total"),
        ],
        &cfg.separator_char,
    );
    let mut cells = schedule_cells("", s, day_total(s));
    cells.remove(0);
    table.add_row(cells);
    print!("{}", table.render());
}
