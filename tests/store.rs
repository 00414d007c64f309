mod common;

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use hrms_lite::error::ApiError;
use hrms_lite::model::attendance::AttendanceStatus;
use hrms_lite::store::{directory, ledger};

use common::test_pool;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn attendance_rows(pool: &SqlitePool, employee_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[actix_web::test]
async fn list_returns_newest_first() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();
    // created_at has sub-second precision; a short pause is enough to order them
    actix_web::rt::time::sleep(Duration::from_millis(20)).await;
    directory::create_employee(&pool, "EMP002", "Priya Patel", "priya@company.in", "Design")
        .await
        .unwrap();

    let employees = directory::list_employees(&pool).await.unwrap();
    let ids: Vec<&str> = employees.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["EMP002", "EMP001"]);
}

#[actix_web::test]
async fn duplicate_employee_id_reports_id_conflict() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();

    // Same ID, different email: the conflict must name the ID
    let err = directory::create_employee(&pool, "EMP001", "Rohan Gupta", "rohan@company.in", "Design")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::DuplicateEmployeeId(ref id) if id == "EMP001"));
}

#[actix_web::test]
async fn duplicate_email_reports_email_conflict() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();

    let err = directory::create_employee(&pool, "EMP002", "Rohan Gupta", "aarav@company.in", "Design")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::DuplicateEmail(ref email) if email == "aarav@company.in"));
}

#[actix_web::test]
async fn mark_attendance_upsert_is_idempotent() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();

    let d = day(2026, 1, 12);

    ledger::mark_attendance(&pool, "EMP001", d, AttendanceStatus::Present)
        .await
        .unwrap();
    ledger::mark_attendance(&pool, "EMP001", d, AttendanceStatus::Present)
        .await
        .unwrap();
    assert_eq!(attendance_rows(&pool, "EMP001").await, 1);

    // Overwrite, still one row
    let record = ledger::mark_attendance(&pool, "EMP001", d, AttendanceStatus::Absent)
        .await
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Absent);
    assert_eq!(attendance_rows(&pool, "EMP001").await, 1);

    let records = ledger::get_attendance(&pool, "EMP001", None, None).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Absent);
}

#[actix_web::test]
async fn mark_attendance_unknown_employee_is_not_found() {
    let pool = test_pool().await;

    let err = ledger::mark_attendance(&pool, "EMP999", day(2026, 1, 12), AttendanceStatus::Present)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::EmployeeNotFound(ref id) if id == "EMP999"));
}

#[actix_web::test]
async fn delete_cascades_into_attendance() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();
    for d in 10..=12 {
        ledger::mark_attendance(&pool, "EMP001", day(2026, 1, d), AttendanceStatus::Present)
            .await
            .unwrap();
    }
    assert_eq!(attendance_rows(&pool, "EMP001").await, 3);

    directory::delete_employee(&pool, "EMP001").await.unwrap();

    let err = ledger::get_attendance(&pool, "EMP001", None, None).await.unwrap_err();
    assert!(matches!(err, ApiError::EmployeeNotFound(_)));
    assert_eq!(attendance_rows(&pool, "EMP001").await, 0);
}

#[actix_web::test]
async fn delete_unknown_employee_is_not_found() {
    let pool = test_pool().await;

    let err = directory::delete_employee(&pool, "EMP404").await.unwrap_err();
    assert!(matches!(err, ApiError::EmployeeNotFound(_)));
}

#[actix_web::test]
async fn range_filter_is_inclusive_and_descending() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();
    for d in 10..=14 {
        ledger::mark_attendance(&pool, "EMP001", day(2026, 1, d), AttendanceStatus::Present)
            .await
            .unwrap();
    }

    let records = ledger::get_attendance(
        &pool,
        "EMP001",
        Some(day(2026, 1, 11)),
        Some(day(2026, 1, 13)),
    )
    .await
    .unwrap();

    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![day(2026, 1, 13), day(2026, 1, 12), day(2026, 1, 11)]
    );
}

#[actix_web::test]
async fn range_bounds_are_independently_optional() {
    let pool = test_pool().await;

    directory::create_employee(&pool, "EMP001", "Aarav Sharma", "aarav@company.in", "Engineering")
        .await
        .unwrap();
    for d in 10..=14 {
        ledger::mark_attendance(&pool, "EMP001", day(2026, 1, d), AttendanceStatus::Present)
            .await
            .unwrap();
    }

    let from_12 = ledger::get_attendance(&pool, "EMP001", Some(day(2026, 1, 12)), None)
        .await
        .unwrap();
    assert_eq!(from_12.len(), 3);
    assert_eq!(from_12[0].date, day(2026, 1, 14));

    let until_11 = ledger::get_attendance(&pool, "EMP001", None, Some(day(2026, 1, 11)))
        .await
        .unwrap();
    assert_eq!(until_11.len(), 2);

    let all = ledger::get_attendance(&pool, "EMP001", None, None).await.unwrap();
    assert_eq!(all.len(), 5);
}

#[actix_web::test]
async fn summary_counts_today_only() {
    let pool = test_pool().await;

    for (id, email) in [
        ("EMP001", "a@company.in"),
        ("EMP002", "b@company.in"),
        ("EMP003", "c@company.in"),
        ("EMP004", "d@company.in"),
    ] {
        directory::create_employee(&pool, id, "Name", email, "Engineering")
            .await
            .unwrap();
    }

    let today = Utc::now().date_naive();
    ledger::mark_attendance(&pool, "EMP001", today, AttendanceStatus::Present)
        .await
        .unwrap();
    ledger::mark_attendance(&pool, "EMP002", today, AttendanceStatus::Present)
        .await
        .unwrap();
    ledger::mark_attendance(&pool, "EMP003", today, AttendanceStatus::Absent)
        .await
        .unwrap();
    // EMP004 has no record today and counts in neither bucket.
    // Yesterday's records must not show up either.
    ledger::mark_attendance(
        &pool,
        "EMP004",
        today.pred_opt().unwrap(),
        AttendanceStatus::Present,
    )
    .await
    .unwrap();

    let summary = ledger::get_summary(&pool).await.unwrap();
    assert_eq!(summary.total_employees, 4);
    assert_eq!(summary.present_today, 2);
    assert_eq!(summary.absent_today, 1);
}
