use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Stored as plain text ("Present" / "Absent") so the table stays readable
/// with any sqlite shell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Display, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One row per `(employee_id, date)` pair; the composite primary key makes
/// a second mark for the same day an update, never a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "date": "2026-08-21",
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2026-08-21", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

/// Dashboard aggregate for the current day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 12,
        "present_today": 9,
        "absent_today": 2
    })
)]
pub struct AttendanceSummary {
    #[schema(example = 12)]
    pub total_employees: i64,

    #[schema(example = 9)]
    pub present_today: i64,

    #[schema(example = 2)]
    pub absent_today: i64,
}
