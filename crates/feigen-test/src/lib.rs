//! FEIGEN Test Harness - Cross-crate checks and benchmarks
//!
//! This crate provides:
//! - Shared trajectory helpers for deterministic map tests
//! - End-to-end pipeline checks spanning maps, analyzers, and crypto
//! - Criterion benchmarks for iteration and encryption throughput

pub mod trajectory;
pub mod integration;

pub use trajectory::*;
pub use integration::*;
