pub mod calendar;
pub mod employee;
pub mod organization;
pub mod punch;
pub mod punch_kind;
pub mod report;
pub mod schedule;
