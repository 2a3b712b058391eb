//! Read interface the accrual engine depends on.
//!
//! The walker never talks to SQLite directly; it receives a store and
//! fetches everything it needs up front. `db::store::SqliteStore` is the
//! production implementation; tests plug in an in-memory one.

use crate::errors::AppResult;
use crate::models::calendar::{Holiday, Recess};
use crate::models::employee::Employee;
use crate::models::punch::Punch;
use crate::models::schedule::ScheduleGroup;
use chrono::NaiveDate;

pub trait TimeclockStore {
    fn employee_by_username(&self, username: &str) -> AppResult<Option<Employee>>;

    fn schedule_group(&self, id: i64) -> AppResult<Option<ScheduleGroup>>;

    /// Punches of one employee with civil dates in [start, end], ascending
    /// by timestamp.
    fn punches_between(
        &self,
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Punch>>;

    fn punches_on(&self, employee_id: i64, date: NaiveDate) -> AppResult<Vec<Punch>> {
        self.punches_between(employee_id, date, date)
    }

    fn holidays(&self, organization_id: i64) -> AppResult<Vec<Holiday>>;

    fn recesses(&self, organization_id: i64) -> AppResult<Vec<Recess>>;
}
