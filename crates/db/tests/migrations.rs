//! Tests for migration state reporting.

use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn test_fresh_database_reports_all_pending(pool: SqlitePool) {
    assert_eq!(mylearn_db::pending_migrations(&pool).await.unwrap(), 3);

    mylearn_db::run_migrations(&pool).await.unwrap();
    assert_eq!(mylearn_db::pending_migrations(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrated_database_reports_none_pending(pool: SqlitePool) {
    assert_eq!(mylearn_db::pending_migrations(&pool).await.unwrap(), 0);
}
