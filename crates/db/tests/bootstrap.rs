use reviewhub_db::DbPool;

/// Full bootstrap test: migrate, health check, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: DbPool) {
    reviewhub_db::health_check(&pool).await.unwrap();

    let tables = ["users", "media_types", "authors", "media", "reviews"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign keys must be enforced on pooled connections.
#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_keys_enabled(pool: DbPool) {
    let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1);
}

/// `create_pool` creates the database file and `run_migrations` is idempotent.
#[tokio::test]
async fn test_create_pool_and_migrate_twice() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("catalog.db");
    let url = format!("sqlite://{}", db_path.display());

    let pool = reviewhub_db::create_pool(&url, 2).await.unwrap();
    reviewhub_db::run_migrations(&pool).await.unwrap();
    reviewhub_db::run_migrations(&pool).await.unwrap();
    reviewhub_db::health_check(&pool).await.unwrap();
    pool.close().await;

    assert!(db_path.exists(), "database file should be created on connect");
}
