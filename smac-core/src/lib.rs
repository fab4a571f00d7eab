//! SMAC Core — the signal engine behind the moving-average crossover tool.
//!
//! This crate contains everything with real semantics:
//! - Domain types (price points, validated price series, aligned signal output)
//! - Rolling average calculator with two boundary policies
//! - Crossover signal detector with two comparison policies
//! - Buy/sell event extraction for chart annotation
//! - Data boundary (provider trait, Yahoo Finance chart API, CSV import)
//!
//! The engine is a pure, fail-fast computation layer: errors are raised
//! synchronously at the point of detection and propagate uncaught; there is
//! no logging, no retrying, and no partial recovery in here.

pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod rolling;
