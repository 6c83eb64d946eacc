//! misstally-core — test catalogs, miss collection and per-category scoring.
//!
//! The pipeline runs loader → index/totals → collector → aggregator →
//! presentation rows. Every stage past the loader works on values scoped to
//! a single session.

pub mod aggregate;
pub mod collector;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod report;
pub mod tally;
