use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database")
}

/// Creates the tables and uniqueness constraints on startup.
///
/// Uniqueness of `employee_id` / `email` and of the `(employee_id, date)`
/// attendance pair is enforced here, at the storage layer, so concurrent
/// writers cannot race a check-then-insert.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            employee_id TEXT    NOT NULL PRIMARY KEY,
            full_name   TEXT    NOT NULL,
            email       TEXT    NOT NULL UNIQUE,
            department  TEXT    NOT NULL,
            created_at  TEXT    NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // `date` is ISO `YYYY-MM-DD` text, so lexical order is date order.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            employee_id TEXT NOT NULL,
            date        TEXT NOT NULL,
            status      TEXT NOT NULL,
            PRIMARY KEY (employee_id, date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
