use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "full_name": "Aarav Sharma",
        "email": "aarav.sharma@company.in",
        "department": "Engineering",
        "created_at": "2026-08-01T09:30:00"
    })
)]
pub struct Employee {
    /// Caller-chosen identity, immutable after creation.
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Aarav Sharma")]
    pub full_name: String,

    #[schema(example = "aarav.sharma@company.in")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    /// UTC timestamp set once at creation.
    #[schema(example = "2026-08-01T09:30:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}
