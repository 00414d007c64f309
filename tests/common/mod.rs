use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use hrms_lite::db::create_schema;

/// Fresh in-memory database per test. A single connection keeps every
/// query on the same `:memory:` instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory sqlite");

    create_schema(&pool).await.expect("Failed to create schema");
    pool
}
