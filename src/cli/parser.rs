use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for weeklog
/// CLI application to track weekly working hours against a schedule template
#[derive(Parser)]
#[command(
    name = "weeklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly time tracking: record worked hours and compare them with your schedule",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The four checkpoints of a day. An empty value ("") clears a checkpoint.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckpointArgs {
    #[arg(long = "arrival", help = "Arrival time (HH:MM)")]
    pub arrival: Option<String>,

    #[arg(long = "lunch-out", help = "Lunch break start (HH:MM)")]
    pub lunch_out: Option<String>,

    #[arg(long = "lunch-in", help = "Lunch break end (HH:MM, empty for a half-day)")]
    pub lunch_in: Option<String>,

    #[arg(long = "departure", help = "Departure time (HH:MM, empty for a half-day)")]
    pub departure: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record, show or delete the hours of one day
    Day {
        #[command(subcommand)]
        action: DayAction,
    },

    /// Inspect and edit weekly schedule templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Weekly summary and week → template assignment
    Week {
        #[command(subcommand)]
        action: WeekAction,
    },

    /// Totals of the most recent weeks with recorded days
    History {
        #[arg(long, short, help = "Number of weeks to list (default from config)")]
        limit: Option<usize>,
    },

    /// Export all data to a JSON file
    Export {
        #[arg(long, value_name = "FILE", help = "Absolute path of the JSON file")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import data from a JSON file (replaces the sections it contains)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show or change the user settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long, value_parser = ["light", "dark", "auto"])]
        theme: Option<String>,

        #[arg(long = "auto-save", help = "Enable or disable auto-save (true/false)")]
        auto_save: Option<bool>,

        #[arg(long = "step", help = "Minute step for time entry: 1, 5, 10 or 15")]
        step: Option<u32>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum DayAction {
    /// Record or update a day; missing checkpoints come from the existing
    /// record or from the week's template
    Set {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        #[command(flatten)]
        times: CheckpointArgs,
    },

    /// Show the recorded and planned hours of a day
    Show {
        /// Date (YYYY-MM-DD or "today")
        date: String,
    },

    /// Delete the record of a day
    Del {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Show a template (default template when no name is given)
    Show { name: Option<String> },

    /// List saved templates with their weekly totals
    List,

    /// Change one weekday of a template
    Set {
        #[arg(long, help = "Template name (omit or 'default' for the default template)")]
        name: Option<String>,

        #[arg(long, help = "Weekday: mon, tue, wed, thu or fri")]
        day: String,

        #[command(flatten)]
        times: CheckpointArgs,
    },

    /// Save a copy of a template under a new name
    Save {
        name: String,

        #[arg(long, help = "Source template (default template when omitted)")]
        from: Option<String>,
    },

    /// Delete a saved template
    Delete {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Restore the built-in default template
    Reset,
}

#[derive(Subcommand)]
pub enum WeekAction {
    /// Show the week summary
    Show {
        #[arg(long, help = "Any date of the week (YYYY-MM-DD or today)")]
        date: Option<String>,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Shift by N weeks (-1 = previous week)"
        )]
        offset: Option<i64>,
    },

    /// Bind a week to a saved template, or back to the default one
    Assign {
        #[arg(required_unless_present = "default", conflicts_with = "default")]
        template: Option<String>,

        #[arg(long, help = "Use the default template for this week")]
        default: bool,

        #[arg(long, help = "Any date of the week (YYYY-MM-DD or today)")]
        date: Option<String>,
    },
}
