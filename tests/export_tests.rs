//! Export tests: CSV/JSON/XLSX/PDF writers and range validation.

mod common;

use common::{init_db_with_seed, rp, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_seed(&db_path);

    let out = temp_out("export_csv_month", "csv");

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "csv", "--file", &out,
            "--range", "2025-11",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-11-03"));
    assert!(content.contains("FERIADO"));
    // Complete mode: every day of the month is present, weekends included.
    assert!(content.contains("2025-11-08"));
}

#[test]
fn test_export_json_contains_total_balance() {
    let db_path = setup_test_db("export_json_total");
    init_db_with_seed(&db_path);

    let out = temp_out("export_json_total", "json");

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "json", "--file", &out,
            "--range", "2025-11",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert!(doc["total_balance"].as_str().is_some());
    assert_eq!(doc["rows"].as_array().map(|r| r.len()), Some(30));
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx_file");
    init_db_with_seed(&db_path);

    let out = temp_out("export_xlsx_file", "xlsx");

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "xlsx", "--file", &out,
            "--range", "2025-11",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_writes_file() {
    let db_path = setup_test_db("export_pdf_file");
    init_db_with_seed(&db_path);

    let out = temp_out("export_pdf_file", "pdf");

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "pdf", "--file", &out,
            "--range", "2025-11:2025-12",
        ])
        .assert()
        .success();

    let content = fs::read(&out).expect("read exported pdf");
    assert!(content.starts_with(b"%PDF"));
}

#[test]
fn test_export_rejects_malformed_range_before_computing() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_seed(&db_path);

    let out = temp_out("export_bad_range", "csv");

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "csv", "--file", &out,
            "--range", "banana",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("banana"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_seed(&db_path);

    rp()
        .args([
            "--db", &db_path, "export", "kleisley", "--format", "csv", "--file",
            "relative.csv", "--range", "2025-11",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}
