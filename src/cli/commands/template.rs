use crate::cli::parser::{Commands, TemplateAction};
use crate::config::Config;
use crate::core::calculator::day::day_total;
use crate::core::template::TemplateLogic;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::WorkDay;
use crate::models::weekly_template::WeeklyTemplate;
use crate::ui::confirm::ask_confirmation;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{colorize_checkpoint, colorize_optional};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Template { action } = cmd else {
        return Ok(());
    };

    match action {
        TemplateAction::Show { name } => {
            let pool = super::open_store(cfg)?;
            let choice = TemplateLogic::choice_from_arg(name.as_deref());
            let template = TemplateLogic::load(&pool, &choice)?;

            header(format!("Template: {}", choice));
            print_template(&template, cfg);
        }

        TemplateAction::List => {
            let pool = super::open_store(cfg)?;
            let templates = TemplateLogic::list(&pool)?;

            if templates.is_empty() {
                info("No saved templates.");
                return Ok(());
            }

            let mut table = Table::new(
                vec![
                    Column::left("Name"),
                    Column::right("Week total"),
                    Column::right("Weeks"),
                ],
                &cfg.separator_char,
            );
            for (name, total) in templates {
                let weeks = TemplateLogic::weeks_using(&pool, &name)?.len();
                table.add_row(vec![name, format_duration(total), weeks.to_string()]);
            }
            print!("{}", table.render());
        }

        TemplateAction::Set { name, day, times } => {
            let weekday =
                WorkDay::from_code(day).ok_or_else(|| AppError::InvalidWeekday(day.clone()))?;
            let input = super::checkpoint_input(times)?;

            if input.is_empty() {
                warning("Nothing to change: give at least one checkpoint.");
                return Ok(());
            }

            let mut pool = super::open_store(cfg)?;
            let choice = TemplateLogic::choice_from_arg(name.as_deref());
            let template = TemplateLogic::edit_day(&mut pool, &choice, weekday, &input)?;

            success(format!(
                "{} of template '{}' updated ({}).",
                weekday.label(),
                choice,
                format_duration(day_total(template.day(weekday)))
            ));
            print_template(&template, cfg);
        }

        TemplateAction::Save { name, from } => {
            let mut pool = super::open_store(cfg)?;
            let source = TemplateLogic::choice_from_arg(from.as_deref());
            let template = TemplateLogic::save_copy(&mut pool, name, &source)?;

            success(format!(
                "Template '{}' saved from '{}' ({} per week).",
                name.trim(),
                source,
                format_duration(TemplateLogic::weekly_total(&template))
            ));
        }

        TemplateAction::Delete { name, yes } => {
            let mut pool = super::open_store(cfg)?;

            let weeks = TemplateLogic::weeks_using(&pool, name)?;
            if !weeks.is_empty() {
                warning(format!(
                    "Weeks still using '{}' will fall back to the default template: {}",
                    name,
                    weeks.join(", ")
                ));
            }

            if !*yes && !ask_confirmation(&format!("Delete template '{}'?", name)) {
                info("Operation cancelled.");
                return Ok(());
            }

            TemplateLogic::delete(&mut pool, name)?;
            success(format!("Template '{}' has been deleted.", name));
        }

        TemplateAction::Reset => {
            let mut pool = super::open_store(cfg)?;
            let template = TemplateLogic::reset_default(&mut pool)?;

            success("Default template restored.");
            print_template(&template, cfg);
        }
    }

    Ok(())
}

fn print_template(template: &WeeklyTemplate, cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::left("Day"),
            Column::left("Arrival"),
            Column::left("Lunch out"),
            Column::left("Lunch in"),
            Column::left("Departure"),
            Column::right("Total"),
        ],
        &cfg.separator_char,
    );

    for (day, s) in template.days() {
        table.add_row(vec![
            day.label().to_string(),
            colorize_checkpoint(&s.arrival),
            colorize_checkpoint(&s.lunch_out),
            colorize_checkpoint(&s.lunch_in),
            colorize_checkpoint(&s.departure),
            colorize_optional(&format_duration(day_total(s))),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{} {}",
        bold("Week total:"),
        format_duration(TemplateLogic::weekly_total(template))
    );
}
