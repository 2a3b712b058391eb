use serde::Serialize;

/// Organization ("empresa") owning employees, holidays and recesses.
/// Office coordinates and radius exist for geofenced punching; the check is
/// not enforced yet and every punch is accepted.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub office_latitude: Option<f64>,
    pub office_longitude: Option<f64>,
    pub allowed_radius_m: i64,
}
