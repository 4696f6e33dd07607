//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Timed iterations.
    pub iterations: u32,
    /// Primitives generated per iteration.
    pub items: usize,
    /// Records committed by the last iteration.
    pub records: usize,
    /// Bytes committed by the last iteration.
    pub bytes: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per iteration (seconds).
    pub avg_iter_time: f64,
    /// Minimum iteration time.
    pub min_iter_time: f64,
    /// Maximum iteration time.
    pub max_iter_time: f64,
    /// Records written per second at the average iteration time.
    pub records_per_sec: f64,
}

impl BenchmarkMetrics {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn to_csv_header() -> String {
        "scenario,iterations,items,records,bytes,total_wall_time_s,avg_iter_ms,min_iter_ms,max_iter_ms,records_per_sec".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.0}",
            self.scenario,
            self.iterations,
            self.items,
            self.records,
            self.bytes,
            self.total_wall_time,
            self.avg_iter_time * 1000.0,
            self.min_iter_time * 1000.0,
            self.max_iter_time * 1000.0,
            self.records_per_sec,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
