//! # Geodex
//!
//! A local-first pipeline that materializes harvested geospatial metadata
//! into a single SQLite database supporting three orthogonal query modes
//! over the same corpus: structured lookup via JSON field extraction,
//! full-text search via FTS5, and spatial containment/overlap via geopoly.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────────┐   ┌────────────────┐
//! │  Corpus  │──▶│     Pipeline     │──▶│     SQLite     │
//! │  *.json  │   │ Map+Sanitize+Geo │   │ JSONB+FTS5+Geo │
//! └──────────┘   └──────────────────┘   └───────┬────────┘
//!                                               │
//!                                        ┌──────┴──────┐
//!                                        │ Index Plan  │
//!                                        │ (post-load) │
//!                                        └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! geodex init                   # create database
//! geodex ingest                 # harvest corpus into the database
//! geodex stats                  # row counts and index overview
//! geodex get <id>               # inspect one stored record
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`harvest`] | Corpus scanning (the harvester boundary) |
//! | [`normalize`] | Field renaming and value sanitization |
//! | [`geometry`] | Bounding box → geopoly ring |
//! | [`project`] | Full-text row projection |
//! | [`store`] | Schema management and per-record persistence |
//! | [`indexes`] | Structured index planning |
//! | [`ingest`] | Pipeline orchestration |
//! | [`stats`] | Database overview |
//! | [`get`] | Record retrieval by identifier |
//! | [`db`] | Database connection |
//! | [`error`] | Pipeline error taxonomy |

pub mod config;
pub mod db;
pub mod error;
pub mod geometry;
pub mod get;
pub mod harvest;
pub mod indexes;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod project;
pub mod stats;
pub mod store;
