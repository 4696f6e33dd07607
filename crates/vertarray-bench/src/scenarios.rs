//! Benchmark scenarios: a workload plus the buffer policy it runs under.
//!
//! Four canonical workloads:
//! 1. **XY fill**: one million single-vertex appends into a fresh buffer
//! 2. **Circles**: many tessellated circles accumulated in one buffer
//! 3. **Round rects**: rotated rounded rectangles with default corner steps
//! 4. **Text instancing**: a glyph string projected at many placements

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use vertarray_buffer::{GrowthPolicy, TexBuffer, XyBuffer};
use vertarray_math::Mat2x3;
use vertarray_shapes::{circle, glyph_quad, round_rect};
use vertarray_types::constants::{DEFAULT_CIRCLE_STEPS, DEFAULT_CORNER_STEPS};
use vertarray_types::{VertexError, VertexResult};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Single-vertex appends from empty.
    XyFill,
    /// Tessellated circles.
    Circles,
    /// Rotated rounded rectangles.
    RoundRects,
    /// Glyph quads projected at many placements.
    TextInstancing,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::XyFill,
            ScenarioKind::Circles,
            ScenarioKind::RoundRects,
            ScenarioKind::TextInstancing,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::XyFill => "xy_fill",
            ScenarioKind::Circles => "circles",
            ScenarioKind::RoundRects => "round_rects",
            ScenarioKind::TextInstancing => "text_instancing",
        }
    }

    /// Looks up a kind by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// Settings shared by every scenario in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Timed iterations per scenario.
    pub iterations: u32,
    /// Growth policy for every buffer the workload creates.
    pub policy: GrowthPolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 5,
            policy: GrowthPolicy::default(),
        }
    }
}

impl BenchConfig {
    /// Checks the iteration count and the policy.
    pub fn validate(&self) -> VertexResult<()> {
        if self.iterations == 0 {
            return Err(VertexError::InvalidConfig(
                "iterations must be at least 1".into(),
            ));
        }
        self.policy.validate()
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Primitives generated per iteration (vertices, shapes or placements).
    pub items: usize,
    /// Tessellation steps for curved shapes; glyphs per string for text.
    pub steps: usize,
    /// Timed iterations.
    pub iterations: u32,
    /// Growth policy for the workload's buffers.
    pub policy: GrowthPolicy,
}

impl Scenario {
    /// One million single-vertex appends.
    pub fn xy_fill() -> Self {
        Self::with_items(ScenarioKind::XyFill, 1_000_000, 0)
    }

    /// 10k circles at the default step count.
    pub fn circles() -> Self {
        Self::with_items(ScenarioKind::Circles, 10_000, DEFAULT_CIRCLE_STEPS)
    }

    /// 10k rotated rounded rectangles.
    pub fn round_rects() -> Self {
        Self::with_items(ScenarioKind::RoundRects, 10_000, DEFAULT_CORNER_STEPS)
    }

    /// A 16-glyph label placed 5k times.
    pub fn text_instancing() -> Self {
        Self::with_items(ScenarioKind::TextInstancing, 5_000, 16)
    }

    fn with_items(kind: ScenarioKind, items: usize, steps: usize) -> Self {
        let config = BenchConfig::default();
        Self {
            kind,
            items,
            steps,
            iterations: config.iterations,
            policy: config.policy,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::XyFill => Self::xy_fill(),
            ScenarioKind::Circles => Self::circles(),
            ScenarioKind::RoundRects => Self::round_rects(),
            ScenarioKind::TextInstancing => Self::text_instancing(),
        }
    }

    /// Applies the iteration count and policy of `config`.
    pub fn with_config(mut self, config: &BenchConfig) -> Self {
        self.iterations = config.iterations;
        self.policy = config.policy;
        self
    }

    /// Runs the workload once into fresh buffers.
    ///
    /// Returns `(records, bytes)` committed by the workload's output buffer.
    pub fn execute(&self) -> VertexResult<(usize, usize)> {
        match self.kind {
            ScenarioKind::XyFill => {
                let mut buf = XyBuffer::with_policy(0, self.policy)?;
                for i in 0..self.items {
                    let x = (i % 1024) as f32;
                    let y = (i / 1024) as f32;
                    buf.push_xy(x, y)?;
                }
                Ok((buf.len(), buf.size_bytes()))
            }
            ScenarioKind::Circles => {
                let mut buf = XyBuffer::with_policy(0, self.policy)?;
                for i in 0..self.items {
                    let center = grid_point(i);
                    circle(&mut buf, center, 0.4, self.steps)?;
                }
                Ok((buf.len(), buf.size_bytes()))
            }
            ScenarioKind::RoundRects => {
                let mut buf = XyBuffer::with_policy(0, self.policy)?;
                for i in 0..self.items {
                    let center = grid_point(i);
                    let theta = (i % 360) as f32 * TAU / 360.0;
                    round_rect(&mut buf, center, 0.8, 0.5, theta, 0.1, self.steps)?;
                }
                Ok((buf.len(), buf.size_bytes()))
            }
            ScenarioKind::TextInstancing => {
                let mut glyphs = TexBuffer::with_policy(0, self.policy)?;
                for g in 0..self.steps {
                    let x = g as f32 * 0.6;
                    let u = (g % 16) as f32 / 16.0;
                    glyph_quad(
                        &mut glyphs,
                        Vec2::new(x, 0.0),
                        Vec2::new(x + 0.5, 1.0),
                        Vec2::new(u, 0.0),
                        Vec2::new(u + 1.0 / 16.0, 1.0),
                    )?;
                }
                let mut out = TexBuffer::with_policy(0, self.policy)?;
                for i in 0..self.items {
                    let theta = (i % 8) as f32 * TAU / 8.0;
                    let m = Mat2x3::from_scale_rotation_translation(
                        Vec2::splat(0.25),
                        theta,
                        grid_point(i),
                    );
                    out.extend_projected(&glyphs, &m)?;
                }
                Ok((out.len(), out.size_bytes()))
            }
        }
    }
}

fn grid_point(i: usize) -> Vec2 {
    Vec2::new((i % 100) as f32, (i / 100) as f32)
}
