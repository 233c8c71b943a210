pub mod backup;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod log;
pub mod settings;
pub mod template;
pub mod week;

use crate::cli::parser::CheckpointArgs;
use crate::config::Config;
use crate::core::day::DayInput;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_optional_checkpoint;

/// Open the configured database, schema brought up to date.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database)
}

/// Validate the checkpoint flags.
pub(crate) fn checkpoint_input(args: &CheckpointArgs) -> AppResult<DayInput> {
    Ok(DayInput {
        arrival: parse_optional_checkpoint(args.arrival.as_ref())?,
        lunch_out: parse_optional_checkpoint(args.lunch_out.as_ref())?,
        lunch_in: parse_optional_checkpoint(args.lunch_in.as_ref())?,
        departure: parse_optional_checkpoint(args.departure.as_ref())?,
    })
}
