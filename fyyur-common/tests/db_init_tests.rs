//! On-disk database initialization

use fyyur_common::db::{get_schema_version, init_database};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("nested").join("fyyur.db");

    let pool = init_database(&db_path).await;
    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing_and_keeps_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("fyyur.db");

    let pool = init_database(&db_path).await.unwrap();
    sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres, image_link) \
         VALUES ('Guns N Petals', 'San Francisco', 'CA', '326-123-5000', '[\"Rock n Roll\"]', 'https://x.test/g.png')",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool.close().await;

    let pool = init_database(&db_path).await.expect("reopen existing database");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(get_schema_version(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_cascade_delete_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let pool = init_database(&tmp.path().join("fyyur.db")).await.unwrap();

    sqlx::query(
        "INSERT INTO venues (id, name, city, state, address, phone, genres, image_link) \
         VALUES (1, 'The Dueling Pianos Bar', 'New York', 'NY', '335 Delancey Street', '914-003-1132', '[]', 'https://x.test/v.png')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO artists (id, name, city, state, phone, genres, image_link) \
         VALUES (1, 'Matt Quevedo', 'New York', 'NY', '300-400-5000', '[]', 'https://x.test/a.png')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (1, 1, '2035-04-01 20:00:00')")
        .execute(&pool)
        .await
        .unwrap();

    // Every pooled connection must enforce the cascade, not just the first one
    for _ in 0..3 {
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    sqlx::query("DELETE FROM venues WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();
    let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(shows, 0);
}
