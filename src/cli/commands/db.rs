use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // plain open: pending migrations only run with --migrate
    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        println!("{CYAN}▶ Running migrations…{RESET}");
        match init_db(&pool.conn)? {
            0 => info("No pending migrations."),
            n => success(format!("{n} migration(s) applied.")),
        }
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{CYAN}▶ Running integrity check…{RESET}");
        let report = stats::integrity_check(&pool)?;
        if report.len() == 1 && report[0] == "ok" {
            success("Integrity check passed.");
        } else {
            error("Integrity check failed:");
            for line in report {
                println!("   {line}");
            }
        }
    }

    if *vacuum {
        println!("{CYAN}▶ Running VACUUM…{RESET}");
        let (before, after) = stats::vacuum(&pool, &cfg.database)?;
        success(format!("Vacuum completed: {before} → {after} bytes."));
        ttlog_quiet(&pool.conn, "vacuum", &cfg.database, "Database vacuumed");
    }

    Ok(())
}
