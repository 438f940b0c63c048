//! Corpus scanning: the boundary to the external harvester.
//!
//! The harvester itself runs elsewhere and leaves one JSON document per
//! dataset under a corpus directory. Scanning walks that directory, parses
//! every matching file, and yields the records in deterministic path order.
//! A file that cannot be read or parsed fails the whole run; the harvester
//! interface models no partial failure.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::HarvestedDoc;

pub fn scan_corpus(config: &Config) -> Result<Vec<HarvestedDoc>> {
    let root = &config.harvest.root;
    if !root.exists() {
        bail!("Harvest root does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.harvest.include_globs)?;

    let mut docs = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !include_set.is_match(relative) {
            continue;
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse corpus file: {}", path.display()))?;
        let Value::Object(fields) = value else {
            bail!("Corpus file is not a JSON object: {}", path.display());
        };

        docs.push(HarvestedDoc {
            path: relative.to_path_buf(),
            fields,
        });
    }

    // Sort for deterministic ordering
    docs.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(docs)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
