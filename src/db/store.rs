//! `Store` implementation on top of the SQLite connection.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::recorded_day::RecordedDay;
use crate::models::settings::Settings;
use crate::models::weekly_template::WeeklyTemplate;
use crate::store::Store;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// The production record store is the database connection itself.
pub type SqliteStore = DbPool;

impl Store for DbPool {
    fn get_day(&self, date: NaiveDate) -> AppResult<Option<RecordedDay>> {
        queries::load_day(&self.conn, date)
    }

    fn put_day(&mut self, day: &RecordedDay) -> AppResult<()> {
        queries::upsert_day(&self.conn, day)
    }

    fn delete_day(&mut self, date: NaiveDate) -> AppResult<bool> {
        queries::delete_day(&self.conn, date)
    }

    fn list_days(&self) -> AppResult<Vec<RecordedDay>> {
        queries::load_days(&self.conn)
    }

    fn replace_days(&mut self, days: &[RecordedDay]) -> AppResult<()> {
        queries::replace_days(&mut self.conn, days)
    }

    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<RecordedDay>> {
        queries::load_days_between(&self.conn, from, to)
    }

    fn get_default_template(&self) -> AppResult<Option<WeeklyTemplate>> {
        queries::load_default_template(&self.conn)
    }

    fn put_default_template(&mut self, template: &WeeklyTemplate) -> AppResult<()> {
        queries::save_default_template(&self.conn, template)
    }

    fn get_template(&self, name: &str) -> AppResult<Option<WeeklyTemplate>> {
        queries::load_template(&self.conn, name)
    }

    fn put_template(&mut self, name: &str, template: &WeeklyTemplate) -> AppResult<()> {
        queries::upsert_template(&self.conn, name, template)
    }

    fn delete_template(&mut self, name: &str) -> AppResult<bool> {
        queries::delete_template(&self.conn, name)
    }

    fn list_templates(&self) -> AppResult<BTreeMap<String, WeeklyTemplate>> {
        queries::load_templates(&self.conn)
    }

    fn replace_templates(
        &mut self,
        templates: &BTreeMap<String, WeeklyTemplate>,
    ) -> AppResult<()> {
        queries::replace_templates(&mut self.conn, templates)
    }

    fn get_week_template(&self, week_id: &str) -> AppResult<Option<String>> {
        queries::load_week_template(&self.conn, week_id)
    }

    fn put_week_template(&mut self, week_id: &str, template_name: &str) -> AppResult<()> {
        queries::upsert_week_template(&self.conn, week_id, template_name)
    }

    fn delete_week_template(&mut self, week_id: &str) -> AppResult<bool> {
        queries::delete_week_template(&self.conn, week_id)
    }

    fn list_week_templates(&self) -> AppResult<BTreeMap<String, String>> {
        queries::load_week_templates(&self.conn)
    }

    fn replace_week_templates(
        &mut self,
        associations: &BTreeMap<String, String>,
    ) -> AppResult<()> {
        queries::replace_week_templates(&mut self.conn, associations)
    }

    fn get_settings(&self) -> AppResult<Option<Settings>> {
        queries::load_settings(&self.conn)
    }

    fn put_settings(&mut self, settings: &Settings) -> AppResult<()> {
        queries::save_settings(&self.conn, settings)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
