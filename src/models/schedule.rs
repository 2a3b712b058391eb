use serde::Serialize;

/// Named weekly template ("escala") shared by employees.
/// Weekday flags are Monday-first, matching `chrono::Weekday::num_days_from_monday`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGroup {
    pub id: i64,
    pub name: String,             // ⇔ schedule_groups.name (unique)
    pub workdays: [bool; 7],      // Mon..Sun
    pub daily_minutes: Option<i64>, // default expected duration
}
