//! # vertarray-bench
//!
//! Benchmark suite for vertarray buffers and shape generators.
//!
//! Provides 4 procedural workloads, per-iteration timing, and CSV export
//! for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{BenchConfig, Scenario, ScenarioKind};
