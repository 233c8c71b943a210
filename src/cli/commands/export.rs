use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let pool = super::open_store(cfg)?;
        ExportLogic::export(&pool, &expand_tilde_str(file), *force)?;
    }

    Ok(())
}
