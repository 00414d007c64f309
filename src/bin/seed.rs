//! Populates the database with dummy data.
//! Run: cargo run --bin seed

use anyhow::Context;
use chrono::{Datelike, Duration, Utc};
use dotenvy::dotenv;
use rand::Rng;

use hrms_lite::config::Config;
use hrms_lite::db::{create_schema, init_db};
use hrms_lite::model::attendance::AttendanceStatus;
use hrms_lite::store::{directory, ledger};

const EMPLOYEES: &[(&str, &str, &str, &str)] = &[
    ("EMP001", "Aarav Sharma", "aarav.sharma@company.in", "Engineering"),
    ("EMP002", "Priya Patel", "priya.patel@company.in", "Engineering"),
    ("EMP003", "Rohan Gupta", "rohan.gupta@company.in", "Design"),
    ("EMP004", "Ananya Iyer", "ananya.iyer@company.in", "Marketing"),
    ("EMP005", "Vikram Singh", "vikram.singh@company.in", "Engineering"),
    ("EMP006", "Neha Reddy", "neha.reddy@company.in", "HR"),
    ("EMP007", "Arjun Nair", "arjun.nair@company.in", "Finance"),
    ("EMP008", "Kavya Joshi", "kavya.joshi@company.in", "Design"),
    ("EMP009", "Rahul Verma", "rahul.verma@company.in", "Marketing"),
    ("EMP010", "Meera Kulkarni", "meera.kulkarni@company.in", "HR"),
    ("EMP011", "Aditya Mehta", "aditya.mehta@company.in", "Engineering"),
    ("EMP012", "Shreya Banerjee", "shreya.banerjee@company.in", "Finance"),
];

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();
    let pool = init_db(&config.database_url).await;
    create_schema(&pool).await.context("create schema")?;

    // Clear existing data
    sqlx::query("DELETE FROM attendance").execute(&pool).await?;
    sqlx::query("DELETE FROM employees").execute(&pool).await?;
    println!("Cleared existing data.");

    for (employee_id, full_name, email, department) in EMPLOYEES {
        directory::create_employee(&pool, employee_id, full_name, email, department).await?;
    }
    println!("Inserted {} employees.", EMPLOYEES.len());

    // Attendance for the last 14 days (including today), weekdays only
    let today = Utc::now().date_naive();
    let mut rng = rand::thread_rng();
    let mut marked = 0u32;

    for (employee_id, ..) in EMPLOYEES {
        for days_ago in 0..14 {
            let date = today - Duration::days(days_ago);
            if date.weekday().number_from_monday() >= 6 {
                continue;
            }
            // 85% chance of being present
            let status = if rng.gen_bool(0.85) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            ledger::mark_attendance(&pool, employee_id, date, status).await?;
            marked += 1;
        }
    }
    println!("Inserted {} attendance records.", marked);

    println!("Seed completed successfully!");
    Ok(())
}
