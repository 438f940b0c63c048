//! Database statistics overview.
//!
//! Gives a quick read on what a run produced: row counts for each of the
//! three structures, how many structured indexes exist, and the database
//! file size. Used by `geodex stats` to sanity-check an ingest.

use anyhow::Result;

use crate::config::Config;
use crate::db;

/// Run the stats command: query the database and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    let documents: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(&pool)
        .await?;

    let bounds: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bounds")
        .fetch_one(&pool)
        .await?;

    let fulltext: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records_fts")
        .fetch_one(&pool)
        .await?;

    let indexes: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_documents_%'",
    )
    .fetch_one(&pool)
    .await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Geodex — Database Stats");
    println!("=======================");
    println!();
    println!("  Database:    {}", config.db.path.display());
    println!("  Size:        {}", format_bytes(db_size));
    println!();
    println!("  Documents:   {}", documents);
    println!("  Bounds:      {}", bounds);
    println!("  Fulltext:    {}", fulltext);
    println!("  Indexes:     {}", indexes);
    println!();

    pool.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
