//! CLI-level tests: init, punch flow, status and seed behavior.

mod common;

use common::{count_punches, init_db_with_seed, rp, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    rp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table' AND name IN
             ('organizations','schedule_groups','employees','punches','holidays','recesses','log')",
            [],
            |row| row.get(0),
        )
        .expect("count tables");
    assert_eq!(tables, 7);
}

#[test]
fn test_punch_for_unknown_employee_fails() {
    let db_path = setup_test_db("punch_unknown_employee");

    rp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rp()
        .args(["--db", &db_path, "punch", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_punch_kind_is_decided_by_backend() {
    let db_path = setup_test_db("punch_backend_kind");
    init_db_with_seed(&db_path);

    // A fresh past day: nothing registered yet, so the first punch
    // becomes an ENTRADA without the caller saying so.
    rp()
        .args([
            "--db",
            &db_path,
            "punch",
            "kleisley",
            "--at",
            "2025-12-20 08:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrada"));
}

#[test]
fn test_punch_duplicate_timestamp_is_suppressed() {
    let db_path = setup_test_db("punch_duplicate");
    init_db_with_seed(&db_path);

    let args = [
        "--db",
        &db_path,
        "punch",
        "kleisley",
        "--at",
        "2025-12-20 08:00",
    ];

    rp().args(args).assert().success();
    let before = count_punches(&db_path);

    rp()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"));
    assert_eq!(count_punches(&db_path), before);
}

#[test]
fn test_punch_explicit_kind_override() {
    let db_path = setup_test_db("punch_explicit_kind");
    init_db_with_seed(&db_path);

    rp()
        .args([
            "--db",
            &db_path,
            "punch",
            "kleisley",
            "--kind",
            "SAIDA",
            "--at",
            "2025-12-20 17:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saída do Expediente"));
}

#[test]
fn test_status_empty_day_suggests_entrada() {
    let db_path = setup_test_db("status_empty_day");
    init_db_with_seed(&db_path);

    // Seed data lives in 2025; today has no punches.
    rp()
        .args(["--db", &db_path, "status", "kleisley"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registrar Entrada"));
}

#[test]
fn test_seed_is_duplicate_suppressed() {
    let db_path = setup_test_db("seed_duplicates");
    init_db_with_seed(&db_path);

    let first = count_punches(&db_path);
    assert!(first > 0);

    rp()
        .args(["--db", &db_path, "seed", "kleisley", "--start", "2025-11-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicates skipped"));

    assert_eq!(count_punches(&db_path), first);
}

#[test]
fn test_seed_skips_weekends_and_holidays() {
    let db_path = setup_test_db("seed_skips");
    init_db_with_seed(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    // 2025-11-20 (Consciência Negra, a Thursday) must have no punches.
    let on_holiday: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM punches WHERE date = '2025-11-20'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(on_holiday, 0);

    // 2025-11-08 is a Saturday.
    let on_saturday: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM punches WHERE date = '2025-11-08'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(on_saturday, 0);

    // The first business day got its full four punches.
    let first_day: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM punches WHERE date = '2025-11-03'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(first_day, 4);
}
