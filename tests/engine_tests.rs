//! Engine-level tests: schedule resolution, pairing, the accrual walk and
//! the status projector, all against the in-memory store.

mod common;

use chrono::{Datelike, NaiveDate};
use common::{MemStore, holiday, plain_employee, punch_at};
use rponto::core::accrual::{ReportMode, ReportOptions, build_report};
use rponto::core::pairing::{PairingMode, worked_minutes};
use rponto::core::schedule::{DEFAULT_DAILY_MINUTES, resolve};
use rponto::core::status::project;
use rponto::errors::AppError;
use rponto::models::punch_kind::PunchKind;
use rponto::models::report::DayClass;
use rponto::models::schedule::ScheduleGroup;
use rponto::utils::date::today;
use rponto::utils::time::format_minutes_signed;

fn opts(mode: ReportMode) -> ReportOptions {
    ReportOptions {
        mode,
        pairing: PairingMode::Positional,
        fallback_daily_minutes: DEFAULT_DAILY_MINUTES,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ---------------------------------------------------------------
// Schedule resolver
// ---------------------------------------------------------------

#[test]
fn test_resolve_defaults_mon_fri_480() {
    let emp = plain_employee(1, "ana");
    let resolved = resolve(&emp, None, DEFAULT_DAILY_MINUTES);

    assert_eq!(
        resolved.workdays,
        [true, true, true, true, true, false, false]
    );
    assert_eq!(resolved.daily_minutes, 480);
}

#[test]
fn test_resolve_own_duration_overrides_only_minutes() {
    let mut emp = plain_employee(1, "ana");
    emp.daily_minutes = Some(360);

    let resolved = resolve(&emp, None, DEFAULT_DAILY_MINUTES);
    assert_eq!(
        resolved.workdays,
        [true, true, true, true, true, false, false]
    );
    assert_eq!(resolved.daily_minutes, 360);
}

#[test]
fn test_resolve_group_flags_and_duration() {
    let group = ScheduleGroup {
        id: 7,
        name: "Escala 6x1".into(),
        workdays: [true, true, true, true, true, true, false],
        daily_minutes: Some(420),
    };

    let mut emp = plain_employee(1, "ana");
    emp.schedule_group_id = Some(7);

    let resolved = resolve(&emp, Some(&group), DEFAULT_DAILY_MINUTES);
    assert!(resolved.works_on(5)); // Saturday from the group
    assert_eq!(resolved.daily_minutes, 420);

    // The employee's own duration beats the group's.
    emp.daily_minutes = Some(300);
    let resolved = resolve(&emp, Some(&group), DEFAULT_DAILY_MINUTES);
    assert_eq!(resolved.daily_minutes, 300);
}

#[test]
fn test_resolve_individual_override_ignores_group() {
    let group = ScheduleGroup {
        id: 7,
        name: "Escala 6x1".into(),
        workdays: [true; 7],
        daily_minutes: Some(420),
    };

    let mut emp = plain_employee(1, "ana");
    emp.schedule_group_id = Some(7);
    emp.individual_override = true;
    emp.individual_workdays = [true, false, true, false, true, false, false];

    let resolved = resolve(&emp, Some(&group), DEFAULT_DAILY_MINUTES);
    assert_eq!(
        resolved.workdays,
        [true, false, true, false, true, false, false]
    );
    assert_eq!(resolved.daily_minutes, 480); // own duration unset → fallback
}

// ---------------------------------------------------------------
// Daily pair aggregator
// ---------------------------------------------------------------

#[test]
fn test_positional_pairing_full_day() {
    let punches = vec![
        punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "12:00", PunchKind::SaidaAlmoco),
        punch_at(1, "2025-11-03", "13:00", PunchKind::VoltaAlmoco),
        punch_at(1, "2025-11-03", "17:00", PunchKind::Saida),
    ];

    let worked = worked_minutes(&punches, PairingMode::Positional).unwrap();
    assert_eq!(worked, 480);
}

#[test]
fn test_positional_pairing_ignores_odd_trailing_punch() {
    let punches = vec![
        punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "12:00", PunchKind::SaidaAlmoco),
        punch_at(1, "2025-11-03", "13:00", PunchKind::VoltaAlmoco),
    ];

    let worked = worked_minutes(&punches, PairingMode::Positional).unwrap();
    assert_eq!(worked, 240);
}

#[test]
fn test_positional_pairing_clamps_negative_delta() {
    // Clock skew: the "closing" punch precedes the opener.
    let punches = vec![
        punch_at(1, "2025-11-03", "09:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "08:00", PunchKind::Saida),
    ];

    let worked = worked_minutes(&punches, PairingMode::Positional).unwrap();
    assert_eq!(worked, 0);
}

#[test]
fn test_strict_pairing_accepts_well_formed_day() {
    let punches = vec![
        punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "12:00", PunchKind::SaidaAlmoco),
        punch_at(1, "2025-11-03", "13:00", PunchKind::VoltaAlmoco),
        punch_at(1, "2025-11-03", "17:00", PunchKind::Saida),
    ];

    let worked = worked_minutes(&punches, PairingMode::Strict).unwrap();
    assert_eq!(worked, 480);
}

#[test]
fn test_strict_pairing_rejects_double_opener() {
    let punches = vec![
        punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "09:00", PunchKind::Entrada),
    ];

    let err = worked_minutes(&punches, PairingMode::Strict).unwrap_err();
    assert!(matches!(err, AppError::MalformedSequence { .. }));
}

// ---------------------------------------------------------------
// Accrual walker
// ---------------------------------------------------------------

fn full_day(store: &mut MemStore, date: &str) {
    store
        .punches
        .push(punch_at(1, date, "08:00", PunchKind::Entrada));
    store
        .punches
        .push(punch_at(1, date, "12:00", PunchKind::SaidaAlmoco));
    store
        .punches
        .push(punch_at(1, date, "13:00", PunchKind::VoltaAlmoco));
    store
        .punches
        .push(punch_at(1, date, "17:00", PunchKind::Saida));
}

#[test]
fn test_walker_holiday_zeroes_expected_minutes() {
    let mut store = MemStore::default();
    store.employees.push(plain_employee(1, "ana"));
    // Wednesday 2025-11-05 is a holiday despite being a scheduled weekday.
    store.holidays.push(holiday(1, "2025-11-05", "Feriado Municipal"));
    full_day(&mut store, "2025-11-03"); // Monday, exactly on target

    let report = build_report(
        &store,
        "ana",
        date("2025-11-03"),
        date("2025-11-07"),
        &opts(ReportMode::Complete),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 5);

    let wednesday = &report.rows[2];
    assert_eq!(wednesday.date.weekday().num_days_from_monday(), 2);
    assert_eq!(wednesday.expected_minutes, 0);
    assert_eq!(wednesday.class, DayClass::Holiday("Feriado Municipal".into()));

    // Mon balanced, Wed zero-expected, Tue/Thu/Fri absences.
    assert_eq!(report.rows[0].balance_minutes, Some(0));
    assert_eq!(report.total_minutes, -3 * 480);
}

#[test]
fn test_walker_absence_row() {
    let mut store = MemStore::default();
    store.employees.push(plain_employee(1, "ana"));

    // A past Tuesday with no punches at all.
    let report = build_report(
        &store,
        "ana",
        date("2025-11-04"),
        date("2025-11-04"),
        &opts(ReportMode::Compact),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.class, DayClass::Absence);
    assert_eq!(row.worked_str(), "00:00");
    assert_eq!(row.balance_str(), "-08:00");
    assert_eq!(report.total_minutes, -480);
}

#[test]
fn test_walker_compact_mode_drops_plain_weekends() {
    let mut store = MemStore::default();
    store.employees.push(plain_employee(1, "ana"));
    full_day(&mut store, "2025-11-07"); // Friday

    // Friday through Sunday: the weekend has no punches and no exception.
    let report = build_report(
        &store,
        "ana",
        date("2025-11-07"),
        date("2025-11-09"),
        &opts(ReportMode::Compact),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].date, date("2025-11-07"));

    let full = build_report(
        &store,
        "ana",
        date("2025-11-07"),
        date("2025-11-09"),
        &opts(ReportMode::Complete),
    )
    .unwrap();

    assert_eq!(full.rows.len(), 3);
    assert_eq!(full.rows[1].class, DayClass::DayOff);
    assert_eq!(full.rows[1].balance_minutes, Some(0));
}

#[test]
fn test_walker_accrual_start_excludes_earlier_days() {
    let mut store = MemStore::default();
    let mut emp = plain_employee(1, "ana");
    emp.accrual_start = Some(date("2025-11-04"));
    store.employees.push(emp);

    // Punches exist on the Monday before the accrual start.
    full_day(&mut store, "2025-11-03");

    let report = build_report(
        &store,
        "ana",
        date("2025-11-03"),
        date("2025-11-05"),
        &opts(ReportMode::Complete),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].date, date("2025-11-04"));
    // Tue + Wed absences only; Monday's punches never contribute.
    assert_eq!(report.total_minutes, -2 * 480);
}

#[test]
fn test_walker_today_stays_unresolved_until_saida() {
    let mut store = MemStore::default();
    store.employees.push(plain_employee(1, "ana"));

    let today_str = today().format("%Y-%m-%d").to_string();
    store
        .punches
        .push(punch_at(1, &today_str, "08:00", PunchKind::Entrada));

    let report = build_report(&store, "ana", today(), today(), &opts(ReportMode::Compact))
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].balance_minutes, None);
    assert_eq!(report.rows[0].balance_str(), "Em andamento");
    // Unresolved days contribute exactly zero.
    assert_eq!(report.total_minutes, 0);
}

#[test]
fn test_walker_unknown_employee_is_typed_error() {
    let store = MemStore::default();
    let err = build_report(
        &store,
        "ghost",
        date("2025-11-03"),
        date("2025-11-07"),
        &opts(ReportMode::Compact),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::UnknownEmployee(u) if u == "ghost"));
}

#[test]
fn test_walker_is_idempotent() {
    let mut store = MemStore::default();
    store.employees.push(plain_employee(1, "ana"));
    full_day(&mut store, "2025-11-03");
    full_day(&mut store, "2025-11-04");

    let a = build_report(
        &store,
        "ana",
        date("2025-11-03"),
        date("2025-11-07"),
        &opts(ReportMode::Compact),
    )
    .unwrap();
    let b = build_report(
        &store,
        "ana",
        date("2025-11-03"),
        date("2025-11-07"),
        &opts(ReportMode::Compact),
    )
    .unwrap();

    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

// ---------------------------------------------------------------
// Status projector
// ---------------------------------------------------------------

#[test]
fn test_status_no_punches_expects_entrada() {
    let day = project(vec![]);
    assert_eq!(day.next, Some(PunchKind::Entrada));
    assert_eq!(day.button_label, "Registrar Entrada");
    assert_eq!(day.elapsed_minutes, 0);
}

#[test]
fn test_status_after_entrada_expects_lunch_out() {
    let day = project(vec![punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada)]);
    assert_eq!(day.next, Some(PunchKind::SaidaAlmoco));
    assert_eq!(day.button_label, "Sair para o Almoço");
    // The open interval is not counted.
    assert_eq!(day.elapsed_minutes, 0);
}

#[test]
fn test_status_closed_day_is_terminal() {
    let day = project(vec![
        punch_at(1, "2025-11-03", "08:00", PunchKind::Entrada),
        punch_at(1, "2025-11-03", "12:00", PunchKind::SaidaAlmoco),
        punch_at(1, "2025-11-03", "13:00", PunchKind::VoltaAlmoco),
        punch_at(1, "2025-11-03", "17:30", PunchKind::Saida),
    ]);

    assert_eq!(day.next, None);
    assert_eq!(day.button_label, "Expediente Finalizado");
    assert_eq!(day.elapsed_minutes, 240 + 270);
    assert_eq!(day.elapsed_str(), "08:30");
}

// ---------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------

#[test]
fn test_signed_minutes_formatting() {
    assert_eq!(format_minutes_signed(0), "+00:00");
    assert_eq!(format_minutes_signed(125), "+02:05");
    assert_eq!(format_minutes_signed(-480), "-08:00");
}
