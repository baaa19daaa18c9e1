mod common;
use common::setup_test_db;
use rservicelog::db::migrate::{pending_migrations, run_pending_migrations};
use rservicelog::db::pool::DbPool;

fn applied_markers(pool: &DbPool) -> i64 {
    pool.conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count markers")
}

#[test]
fn test_fresh_db_has_schema_and_one_marker_per_migration() {
    let db_path = setup_test_db("db_migration_markers");
    let pool = DbPool::new(&db_path).expect("open db");

    assert!(pending_migrations(&pool.conn).unwrap().is_empty());

    let kv_tables: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(kv_tables, 1);

    let markers = applied_markers(&pool);
    assert_eq!(markers, 2);

    // re-running is a no-op, no duplicate markers
    run_pending_migrations(&pool.conn).unwrap();
    drop(pool);
    let reopened = DbPool::new(&db_path).expect("reopen db");
    assert_eq!(applied_markers(&reopened), markers);
}

#[test]
fn test_no_transaction_left_open_after_migrations() {
    let db_path = setup_test_db("db_migration_autocommit");
    let pool = DbPool::new(&db_path).expect("open db");

    assert!(pool.conn.is_autocommit());
}
