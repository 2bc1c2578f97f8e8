//! Reading the `schema_migrations` tracking table

use crate::error::DbResult;
use crate::traits::Database;
use molo_core::AppliedVersions;

/// Table recording applied migration versions
pub const SCHEMA_MIGRATIONS_TABLE: &str = "schema_migrations";

/// Load applied versions in query order.
///
/// A missing table yields [`AppliedVersions::Uninitialized`], which is
/// different from an existing but empty table.
pub async fn applied_versions(db: &dyn Database) -> DbResult<AppliedVersions> {
    if !db.relation_exists(SCHEMA_MIGRATIONS_TABLE).await? {
        log::debug!("{} does not exist", SCHEMA_MIGRATIONS_TABLE);
        return Ok(AppliedVersions::Uninitialized);
    }

    let versions = db
        .query_strings(&format!(
            "SELECT CAST(version AS VARCHAR(255)) FROM {}",
            SCHEMA_MIGRATIONS_TABLE
        ))
        .await?;
    log::debug!("{} applied version(s) recorded", versions.len());
    Ok(AppliedVersions::Recorded(versions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duckdb::DuckDbBackend;
    use crate::sqlite::SqliteBackend;

    #[tokio::test]
    async fn test_missing_table_is_uninitialized() {
        let db = SqliteBackend::in_memory().unwrap();
        assert_eq!(
            applied_versions(&db).await.unwrap(),
            AppliedVersions::Uninitialized
        );
    }

    #[tokio::test]
    async fn test_empty_table_is_recorded_empty() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute_batch("CREATE TABLE schema_migrations (version VARCHAR(255) NOT NULL);")
            .await
            .unwrap();
        assert_eq!(
            applied_versions(&db).await.unwrap(),
            AppliedVersions::Recorded(vec![])
        );
    }

    #[tokio::test]
    async fn test_versions_in_insert_order() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE schema_migrations (version VARCHAR(255) NOT NULL);
             INSERT INTO schema_migrations VALUES ('20230102000000'), ('20230101000000');",
        )
        .await
        .unwrap();
        assert_eq!(
            applied_versions(&db).await.unwrap(),
            AppliedVersions::Recorded(vec![
                "20230102000000".to_string(),
                "20230101000000".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_integer_versions_on_duckdb() {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE schema_migrations (version BIGINT NOT NULL);
             INSERT INTO schema_migrations VALUES (20230101000000);",
        )
        .await
        .unwrap();
        assert_eq!(
            applied_versions(&db).await.unwrap(),
            AppliedVersions::Recorded(vec!["20230101000000".to_string()])
        );
    }
}
