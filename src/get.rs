//! Record retrieval by identifier.
//!
//! Fetches one stored structured payload via field-extraction queries and
//! prints it. This is an inspection surface for checking what a run
//! actually persisted; the database file itself remains the handoff point
//! to any serving layer.

use anyhow::{bail, Result};
use sqlx::Row;

use crate::config::Config;
use crate::db;

/// CLI entry point — fetch one record's payload and print it to stdout.
pub async fn run_get(config: &Config, id: &str) -> Result<()> {
    let pool = db::connect(config).await?;

    let row = sqlx::query(
        "SELECT json(record) AS record, record ->> '$.title' AS title \
         FROM documents WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    let Some(row) = row else {
        pool.close().await;
        bail!("record not found: {}", id);
    };

    let payload: String = row.get("record");
    let title: Option<String> = row.get("title");

    println!("--- Record ---");
    println!("id:    {}", id);
    println!("title: {}", title.as_deref().unwrap_or("(untitled)"));
    println!();
    println!("{}", payload);

    pool.close().await;
    Ok(())
}
