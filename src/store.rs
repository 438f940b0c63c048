//! Store schema management and per-record persistence.
//!
//! Three structures share the record identifier as their natural key:
//! `documents` holds the canonical record as a binary JSON payload queried
//! through `$.<field>` path extraction, `bounds` is a geopoly virtual
//! table over the bounding-box ring, and `records_fts` is the FTS5 table
//! fed by the full-text projection. Creation is existence-checked so
//! re-runs are additive, and the three writes for one record share a
//! transaction so a failed record leaves no partial rows behind.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::Record;
use crate::project::{self, FULLTEXT_FIELDS};

/// Create any of the three structures that do not exist yet.
///
/// Safe to call on every run; never touches an existing structure. There
/// is no migration support — a schema change requires a fresh database
/// file.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    if !structure_exists(pool, "documents").await? {
        sqlx::query(
            r#"
            CREATE TABLE documents (
                id TEXT PRIMARY KEY,
                record BLOB NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;
    }

    if !structure_exists(pool, "bounds").await? {
        sqlx::query("CREATE VIRTUAL TABLE bounds USING geopoly(id)")
            .execute(pool)
            .await?;
    }

    if !structure_exists(pool, "records_fts").await? {
        let sql = format!(
            "CREATE VIRTUAL TABLE records_fts USING fts5(id UNINDEXED, {})",
            FULLTEXT_FIELDS.join(", ")
        );
        sqlx::query(&sql).execute(pool).await?;
    }

    Ok(())
}

/// Check a structure's existence by name. Virtual table CREATEs are not
/// idempotent, so every structure goes through this check.
async fn structure_exists(pool: &SqlitePool, name: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Write one record's document, bounds, and full-text rows atomically.
///
/// Rows are written once and never mutated; re-inserting an identifier
/// fails the primary-key constraint and rolls all three writes back.
pub async fn insert_record(pool: &SqlitePool, id: &str, record: &Record, ring: &str) -> Result<()> {
    let payload = serde_json::to_string(record)?;
    let fulltext = project::fulltext_row(record);

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO documents (id, record) VALUES (?, jsonb(?))")
        .bind(id)
        .bind(&payload)
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO bounds (_shape, id) VALUES (?, ?)")
        .bind(ring)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let sql = format!(
        "INSERT INTO records_fts (id, {}) VALUES (?{})",
        FULLTEXT_FIELDS.join(", "),
        ", ?".repeat(FULLTEXT_FIELDS.len())
    );
    let mut insert = sqlx::query(&sql).bind(id);
    for value in &fulltext {
        insert = insert.bind(value);
    }
    insert.execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(())
}
