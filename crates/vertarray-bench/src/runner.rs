//! Benchmark runner: executes scenarios and collects timing metrics.

use std::time::Instant;

use tracing::info;
use vertarray_types::{VertexError, VertexResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{BenchConfig, Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Each iteration builds its buffers from scratch so growth is part of
    /// the measured time.
    pub fn run(scenario: &Scenario) -> VertexResult<BenchmarkMetrics> {
        if scenario.iterations == 0 {
            return Err(VertexError::InvalidConfig(
                "iterations must be at least 1".into(),
            ));
        }
        scenario.policy.validate()?;

        let mut iter_times: Vec<f64> = Vec::with_capacity(scenario.iterations as usize);
        let mut records = 0;
        let mut bytes = 0;

        let total_start = Instant::now();
        for _ in 0..scenario.iterations {
            let start = Instant::now();
            (records, bytes) = scenario.execute()?;
            iter_times.push(start.elapsed().as_secs_f64());
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_iter = iter_times.iter().sum::<f64>() / iter_times.len() as f64;
        let min_iter = iter_times.iter().copied().fold(f64::MAX, f64::min);
        let max_iter = iter_times.iter().copied().fold(0.0, f64::max);
        let throughput = if avg_iter > 0.0 {
            records as f64 / avg_iter
        } else {
            0.0
        };

        info!(
            scenario = scenario.kind.name(),
            iterations = scenario.iterations,
            records,
            avg_ms = avg_iter * 1000.0,
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            iterations: scenario.iterations,
            items: scenario.items,
            records,
            bytes,
            total_wall_time,
            avg_iter_time: avg_iter,
            min_iter_time: min_iter,
            max_iter_time: max_iter,
            records_per_sec: throughput,
        })
    }

    /// Run every scenario under `config`.
    pub fn run_all(config: &BenchConfig) -> VertexResult<Vec<BenchmarkMetrics>> {
        Self::run_kinds(ScenarioKind::all(), config)
    }

    /// Run the given scenario kinds under `config`, in order.
    pub fn run_kinds(
        kinds: &[ScenarioKind],
        config: &BenchConfig,
    ) -> VertexResult<Vec<BenchmarkMetrics>> {
        config.validate()?;
        kinds
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind).with_config(config)))
            .collect()
    }
}
