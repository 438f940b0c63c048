//! Structured index planning.
//!
//! Structured lookups run against JSON path extraction on `documents`, so
//! the plan generates expression indexes: one per indexed field, plus two
//! composites for every ordered facet pair. Filtering uses `->` extraction
//! so multi-valued fields stay intact; GROUP-BY counting needs plain SQL
//! text, so each pair gets a second composite with `->>` on its counted
//! column. Both orderings of each pair are generated because either facet
//! can play the filter or the count role. Three-way composites are not
//! generated; index storage grows combinatorially with facet count.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::debug;

/// Fields receiving a single-column structured index.
pub const INDEX_FIELDS: &[&str] = &[
    "title",
    "type",
    "provider",
    "license",
    "language",
    "updated",
];

/// Subset of [`INDEX_FIELDS`] eligible for composite filter/count indexing.
pub const FACET_FIELDS: &[&str] = &["type", "provider", "license"];

/// The full index plan as `(name, CREATE INDEX ...)` pairs.
pub fn index_statements() -> Vec<(String, String)> {
    let mut statements = Vec::new();

    for field in INDEX_FIELDS {
        let name = format!("idx_documents_{field}");
        let sql =
            format!("CREATE INDEX IF NOT EXISTS {name} ON documents(record ->> '$.{field}')");
        statements.push((name, sql));
    }

    for a in FACET_FIELDS {
        for b in FACET_FIELDS {
            if a == b {
                continue;
            }

            let filter_name = format!("idx_documents_{a}_{b}");
            let filter_sql = format!(
                "CREATE INDEX IF NOT EXISTS {filter_name} \
                 ON documents(record -> '$.{a}', record -> '$.{b}')"
            );
            statements.push((filter_name, filter_sql));

            let count_name = format!("idx_documents_{a}_{b}_txt");
            let count_sql = format!(
                "CREATE INDEX IF NOT EXISTS {count_name} \
                 ON documents(record -> '$.{a}', record ->> '$.{b}')"
            );
            statements.push((count_name, count_sql));
        }
    }

    statements
}

/// Execute the index plan. Runs once, after ingestion; deferring index
/// creation keeps bulk inserts cheap. Failures here are fatal — a
/// partially indexed store is not a usable output.
pub async fn build_indexes(pool: &SqlitePool) -> Result<()> {
    for (name, sql) in index_statements() {
        sqlx::query(&sql).execute(pool).await?;
        debug!(index = %name, "index ensured");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_facets_are_subset_of_index_fields() {
        for facet in FACET_FIELDS {
            assert!(INDEX_FIELDS.contains(facet));
        }
        assert!(FACET_FIELDS.len() < INDEX_FIELDS.len());
    }

    #[test]
    fn test_plan_size() {
        let pairs = FACET_FIELDS.len() * (FACET_FIELDS.len() - 1);
        let expected = INDEX_FIELDS.len() + pairs * 2;
        assert_eq!(index_statements().len(), expected);
    }

    #[test]
    fn test_index_names_unique() {
        let names: HashSet<String> = index_statements().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), index_statements().len());
    }

    #[test]
    fn test_both_orderings_generated() {
        let names: HashSet<String> = index_statements().into_iter().map(|(n, _)| n).collect();
        for a in FACET_FIELDS {
            for b in FACET_FIELDS {
                if a == b {
                    continue;
                }
                assert!(names.contains(&format!("idx_documents_{a}_{b}")));
                assert!(names.contains(&format!("idx_documents_{b}_{a}")));
                assert!(names.contains(&format!("idx_documents_{a}_{b}_txt")));
            }
        }
    }

    #[test]
    fn test_count_composite_uses_text_extraction() {
        for (name, sql) in index_statements() {
            if name.ends_with("_txt") {
                assert!(sql.contains("->>"), "count composite missing ->>: {sql}");
            }
        }
    }
}
