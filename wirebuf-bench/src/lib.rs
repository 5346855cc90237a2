//! # Wirebuf Bench
//!
//! Benchmarking utilities for wirebuf performance testing.

pub mod corpus;
pub mod throughput;
