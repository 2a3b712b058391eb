//! CLI report tests over a seeded database.

mod common;

use common::{init_db_with_seed, rp, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_report_month_shows_total_and_holidays() {
    let db_path = setup_test_db("report_month");
    init_db_with_seed(&db_path);

    rp()
        .args([
            "--db", &db_path, "report", "kleisley", "--range", "2025-11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saldo total:"))
        .stdout(predicate::str::contains("FERIADO"));
}

#[test]
fn test_report_full_mode_includes_weekends() {
    let db_path = setup_test_db("report_full_mode");
    init_db_with_seed(&db_path);

    rp()
        .args([
            "--db", &db_path, "report", "kleisley", "--range", "2025-11", "--full",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("FDS"));
}

#[test]
fn test_report_is_idempotent() {
    let db_path = setup_test_db("report_idempotent");
    init_db_with_seed(&db_path);

    let run = || {
        rp()
            .args([
                "--db", &db_path, "report", "kleisley", "--range", "2025-11",
            ])
            .output()
            .expect("run report")
    };

    let a = run();
    let b = run();

    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_report_unknown_employee_fails() {
    let db_path = setup_test_db("report_unknown");
    init_db_with_seed(&db_path);

    rp()
        .args(["--db", &db_path, "report", "ghost", "--range", "2025-11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_report_absence_after_manual_gap() {
    let db_path = setup_test_db("report_absence");

    rp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // Employee exists with punches in November only; December business
    // days without punches must show up as FALTA.
    rp()
        .args(["--db", &db_path, "seed", "kleisley", "--start", "2025-11-03"])
        .assert()
        .success();

    rp()
        .args([
            "--db",
            &db_path,
            "report",
            "kleisley",
            "--range",
            "2025-12-22:2025-12-24",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("FALTA"));
}
