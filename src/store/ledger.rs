use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::store::directory;

/// Upserts the status for `(employee_id, date)` in one conditional write.
///
/// The composite primary key plus `ON CONFLICT ... DO UPDATE` makes this
/// idempotent: repeating the call can only overwrite the status, never add
/// a second row. Concurrent marks for the same pair resolve last-writer-wins.
pub async fn mark_attendance(
    pool: &SqlitePool,
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<AttendanceRecord, ApiError> {
    if !directory::employee_exists(pool, employee_id).await? {
        return Err(ApiError::EmployeeNotFound(employee_id.to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        VALUES (?, ?, ?)
        ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .bind(status)
    .execute(pool)
    .await?;

    debug!(employee_id, %date, %status, "Attendance marked");

    Ok(AttendanceRecord {
        employee_id: employee_id.to_string(),
        date,
        status,
    })
}

/// Attendance history for one employee, newest date first, optionally
/// bounded by an inclusive `[start_date, end_date]` window. Either bound
/// may be given on its own. Capped at 1000 rows.
pub async fn get_attendance(
    pool: &SqlitePool,
    employee_id: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    if !directory::employee_exists(pool, employee_id).await? {
        return Err(ApiError::EmployeeNotFound(employee_id.to_string()));
    }

    // ---------- build WHERE clause dynamically ----------
    let mut conditions = vec!["employee_id = ?"];
    if start_date.is_some() {
        conditions.push("date >= ?");
    }
    if end_date.is_some() {
        conditions.push("date <= ?");
    }

    let sql = format!(
        "SELECT employee_id, date, status FROM attendance WHERE {} ORDER BY date DESC LIMIT 1000",
        conditions.join(" AND ")
    );

    let mut query = sqlx::query_as::<_, AttendanceRecord>(&sql).bind(employee_id);
    if let Some(start) = start_date {
        query = query.bind(start);
    }
    if let Some(end) = end_date {
        query = query.bind(end);
    }

    let records = query.fetch_all(pool).await?;
    Ok(records)
}

/// Dashboard counts. "Today" is the UTC calendar date, matching the UTC
/// `created_at` stamps; employees with no record today land in neither
/// bucket.
pub async fn get_summary(pool: &SqlitePool) -> Result<AttendanceSummary, ApiError> {
    let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;

    let today = Utc::now().date_naive();

    let present_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(today)
            .bind(AttendanceStatus::Present)
            .fetch_one(pool)
            .await?;

    let absent_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
            .bind(today)
            .bind(AttendanceStatus::Absent)
            .fetch_one(pool)
            .await?;

    Ok(AttendanceSummary {
        total_employees,
        present_today,
        absent_today,
    })
}

/// Removes every attendance row for the employee. Only called from the
/// directory's delete path, after the employee row is gone.
pub(crate) async fn cascade_delete(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<u64, ApiError> {
    let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
