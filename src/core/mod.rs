pub mod accrual;
pub mod backup;
pub mod calendar;
pub mod log;
pub mod pairing;
pub mod schedule;
pub mod seed;
pub mod status;
pub mod store;
