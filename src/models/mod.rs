pub mod day_schedule;
pub mod recorded_day;
pub mod settings;
pub mod template_choice;
pub mod week_stats;
pub mod weekday;
pub mod weekly_template;
