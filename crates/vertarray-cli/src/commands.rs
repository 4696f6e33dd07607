//! CLI command implementations.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use glam::Vec2;
use tracing::debug;
use vertarray_bench::{BenchConfig, BenchmarkMetrics, BenchmarkRunner, ScenarioKind};
use vertarray_buffer::{TexBuffer, XyBuffer};
use vertarray_shapes::{aligned_box, arc, circle, glyph_quad, line, rotated_box, round_rect};
use vertarray_types::constants::{DEFAULT_ARC_STEPS, DEFAULT_CIRCLE_STEPS, DEFAULT_CORNER_STEPS};
use vertarray_types::VertexError;

const SHAPES: &str = "line, box, rotated_box, circle, arc, round_rect, glyph";

/// Run benchmark suite.
pub fn bench(
    scenario_name: &str,
    iterations: u32,
    output_path: Option<&str>,
    min_capacity: Option<usize>,
    growth_factor: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BenchConfig {
        iterations,
        ..BenchConfig::default()
    };
    if let Some(min) = min_capacity {
        config.policy.min_capacity = min;
    }
    if let Some(factor) = growth_factor {
        config.policy.growth_factor = factor;
    }
    config.validate()?;

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::from_name(scenario_name).ok_or_else(|| {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            VertexError::InvalidConfig(format!(
                "unknown scenario '{scenario_name}'. Available: {}, all",
                available.join(", ")
            ))
        })?;
        vec![kind]
    };

    println!("vertarray benchmark suite");
    println!("═════════════════════════");
    println!();

    let all_metrics = BenchmarkRunner::run_kinds(&kinds, &config)?;
    for metrics in &all_metrics {
        println!(
            "{} ({} items, {} iterations)",
            metrics.scenario, metrics.items, metrics.iterations
        );
        println!("  Records:       {}", metrics.records);
        println!("  Avg iter:      {:.3}ms", metrics.avg_iter_time * 1000.0);
        println!("  Throughput:    {:.0} records/s", metrics.records_per_sec);
        println!();
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv).map_err(VertexError::from)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Generate one shape and print its vertices as JSON.
pub fn dump(shape: &str, steps: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let json = if shape == "glyph" {
        let mut buf = TexBuffer::new();
        glyph_quad(&mut buf, Vec2::ZERO, Vec2::new(0.5, 1.0), Vec2::ZERO, Vec2::ONE)?;
        serde_json::to_string_pretty(buf.as_slice())?
    } else {
        let buf = outline(shape, steps)?;
        serde_json::to_string_pretty(buf.as_slice())?
    };
    println!("{json}");
    Ok(())
}

fn outline(shape: &str, steps: Option<usize>) -> Result<XyBuffer, VertexError> {
    let mut buf = XyBuffer::new();
    match shape {
        "line" => line(&mut buf, Vec2::ZERO, Vec2::ONE)?,
        "box" => aligned_box(&mut buf, Vec2::ZERO, 2.0, 1.0)?,
        "rotated_box" => rotated_box(&mut buf, Vec2::ZERO, 2.0, 1.0, FRAC_PI_6)?,
        "circle" => circle(
            &mut buf,
            Vec2::ZERO,
            1.0,
            steps.unwrap_or(DEFAULT_CIRCLE_STEPS),
        )?,
        "arc" => arc(
            &mut buf,
            Vec2::ZERO,
            1.0,
            0.0,
            FRAC_PI_2,
            steps.unwrap_or(DEFAULT_ARC_STEPS),
        )?,
        "round_rect" => round_rect(
            &mut buf,
            Vec2::ZERO,
            2.0,
            1.0,
            0.0,
            0.25,
            steps.unwrap_or(DEFAULT_CORNER_STEPS),
        )?,
        other => {
            return Err(VertexError::InvalidShape(format!(
                "unknown shape '{other}'. Available: {SHAPES}"
            )))
        }
    }
    debug!(shape, vertices = buf.len(), "generated shape");
    Ok(buf)
}
