use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::ui::messages::{detail, info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut pool = super::open_store(cfg)?;

        let report = ImportLogic::import_file(&mut pool, &path)?;

        if report.is_empty() {
            info("Nothing to import: the file holds no known section.");
            return Ok(());
        }

        success(format!("Import completed: {}", path.display()));
        for (section, count) in report.sections() {
            detail(section, count);
        }
    }

    Ok(())
}
