use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::store::ledger;
use crate::validate::require_non_empty;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001", value_type = String)]
    pub employee_id: String,
    #[schema(example = "2026-08-21", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceRange {
    #[schema(example = "2026-08-01", format = "date", value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-08-21", format = "date", value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
}

/// Attendance Summary
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    responses(
        (status = 200, description = "Dashboard counts for today", body = AttendanceSummary)
    ),
    tag = "Attendance"
)]
pub async fn get_summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let summary = ledger::get_summary(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Get Attendance
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("start_date", Query, description = "Inclusive lower bound (YYYY-MM-DD)"),
        ("end_date", Query, description = "Inclusive upper bound (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records, newest first", body = Vec<AttendanceRecord>),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee with ID 'EMP001' not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    range: web::Query<AttendanceRange>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let records = ledger::get_attendance(
        pool.get_ref(),
        &employee_id,
        range.start_date,
        range.end_date,
    )
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked (insert or overwrite)", body = AttendanceRecord),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee with ID 'EMP999' not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    require_non_empty("employee_id", &payload.employee_id)?;

    let record = ledger::mark_attendance(
        pool.get_ref(),
        &payload.employee_id,
        payload.date,
        payload.status,
    )
    .await?;

    Ok(HttpResponse::Created().json(record))
}
