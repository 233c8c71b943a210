use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Prepare a freshly opened connection: connection pragmas, then the
/// migration engine. Returns the number of migrations applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))
}
