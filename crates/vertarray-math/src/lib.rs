//! # vertarray-math
//!
//! Small 2D math layer for vertarray.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, `Affine2`)
//! - [`Mat2x3`], the 2×3 affine transform used to project one buffer
//!   into another

pub mod mat2x3;

pub use mat2x3::Mat2x3;

// Re-export glam types as the canonical math types for vertarray.
pub use glam::{Affine2, Vec2, Vec3};
