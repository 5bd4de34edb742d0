use fmk_db::create_memory_pool;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    create_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Number of rows in the table, regardless of flags
pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
