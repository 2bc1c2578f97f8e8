use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn test_query_strings_skips_nulls() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t (v VARCHAR);
         INSERT INTO t VALUES ('a'), (NULL), ('b');",
    )
    .await
    .unwrap();

    let values = db.query_strings("SELECT v FROM t ORDER BY v").await.unwrap();
    assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_query_optional_string() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (v VARCHAR); INSERT INTO t VALUES ('x');")
        .await
        .unwrap();

    assert_eq!(
        db.query_optional_string("SELECT v FROM t").await.unwrap(),
        Some("x".to_string())
    );
    assert_eq!(
        db.query_optional_string("SELECT v FROM t WHERE v = 'nope'")
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_relation_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t1 (id INT); CREATE VIEW v1 AS SELECT 1 AS id;")
        .await
        .unwrap();

    assert!(db.relation_exists("t1").await.unwrap());
    assert!(db.relation_exists("v1").await.unwrap());
    assert!(!db.relation_exists("nonexistent").await.unwrap());
}

#[tokio::test]
async fn test_relation_exists_schema_qualified() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE SCHEMA staging; CREATE TABLE staging.t (id INT);")
        .await
        .unwrap();

    assert!(db.relation_exists("staging.t").await.unwrap());
    assert!(!db.relation_exists("t").await.unwrap());
}

#[tokio::test]
async fn test_bad_sql_is_execution_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.query_strings("SELEC nonsense").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[tokio::test]
async fn test_file_database_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.duckdb");
    {
        let db = DuckDbBackend::from_path(&path).unwrap();
        db.execute_batch("CREATE TABLE kept (id INT);").await.unwrap();
    }
    let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
    assert!(db.relation_exists("kept").await.unwrap());
}

#[tokio::test]
async fn test_open_read_only_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.duckdb");
    {
        let db = DuckDbBackend::from_path(&path).unwrap();
        db.execute_batch("CREATE TABLE kept (id INT);").await.unwrap();
    }
    let db = DuckDbBackend::open_read_only(&path).unwrap();
    assert!(db.relation_exists("kept").await.unwrap());
    assert!(db.execute_batch("CREATE TABLE other (id INT);").await.is_err());
}

#[test]
fn test_open_read_only_missing_file_creates_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.duckdb");
    let err = DuckDbBackend::open_read_only(&path).err().unwrap();
    assert!(matches!(err, DbError::ConnectionError(_)));
    assert!(!path.exists());
}
