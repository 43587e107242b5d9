//! # ortypes Bench
//!
//! Benchmark fixtures for ortypes performance testing.

pub mod fixtures;
