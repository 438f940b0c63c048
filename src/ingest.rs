//! Ingestion pipeline orchestration.
//!
//! Drives the full run: corpus scan → per-record normalization, geometry
//! extraction, and persistence → one index-building pass. A record that
//! fails at any stage is logged with its identifier and skipped whole;
//! schema setup and index creation failures are fatal.

use anyhow::{anyhow, Result};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::Config;
use crate::db;
use crate::geometry;
use crate::harvest;
use crate::indexes;
use crate::models::{HarvestedDoc, IngestReport};
use crate::normalize;
use crate::store;

pub async fn run_ingest(config: &Config, dry_run: bool, limit: Option<usize>) -> Result<()> {
    let pool = db::connect(config).await?;
    store::ensure_schema(&pool).await?;

    let mut docs = harvest::scan_corpus(config)?;
    if let Some(lim) = limit {
        docs.truncate(lim);
    }

    if dry_run {
        println!("ingest (dry-run)");
        println!("  records found: {}", docs.len());
        pool.close().await;
        return Ok(());
    }

    let mut report = IngestReport {
        fetched: docs.len() as u64,
        ..IngestReport::default()
    };

    for doc in &docs {
        match ingest_one(&pool, doc).await {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                report.skipped += 1;
                warn!(record = %doc.display_id(), error = %e, "record skipped");
            }
        }
    }

    indexes::build_indexes(&pool).await?;

    println!("ingest");
    println!("  fetched: {} records", report.fetched);
    println!("  inserted: {}", report.inserted);
    println!("  skipped: {}", report.skipped);
    println!("  indexes: {}", indexes::index_statements().len());
    println!("ok");

    pool.close().await;
    Ok(())
}

/// Map, sanitize, and persist a single record.
///
/// Any error excludes the whole record: `insert_record` is transactional,
/// so a failure leaves no document, bounds, or full-text row behind.
async fn ingest_one(pool: &SqlitePool, doc: &HarvestedDoc) -> Result<()> {
    let mapped = normalize::map_fields(doc.fields.clone());
    let record = normalize::sanitize_record(mapped);

    let id = record
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("record has no string identifier"))?
        .to_string();

    let ring = geometry::bbox_ring(record.get("bbox"))?;

    store::insert_record(pool, &id, &record, &ring).await?;
    Ok(())
}
