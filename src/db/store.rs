//! SQLite-backed implementation of the engine's read interface.

use crate::core::store::TimeclockStore;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::calendar::{Holiday, Recess};
use crate::models::employee::Employee;
use crate::models::punch::Punch;
use crate::models::schedule::ScheduleGroup;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl TimeclockStore for SqliteStore<'_> {
    fn employee_by_username(&self, username: &str) -> AppResult<Option<Employee>> {
        queries::employee_by_username(self.conn, username)
    }

    fn schedule_group(&self, id: i64) -> AppResult<Option<ScheduleGroup>> {
        queries::schedule_group_by_id(self.conn, id)
    }

    fn punches_between(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Punch>> {
        queries::punches_between(self.conn, employee_id, start, end)
    }

    fn holidays(&self, organization_id: i64) -> AppResult<Vec<Holiday>> {
        queries::holidays_by_organization(self.conn, organization_id)
    }

    fn recesses(&self, organization_id: i64) -> AppResult<Vec<Recess>> {
        queries::recesses_by_organization(self.conn, organization_id)
    }
}
