//! Parameter checks shared by the generators.

use vertarray_math::Vec2;
use vertarray_types::{VertexError, VertexResult};

pub(crate) fn finite_point(name: &str, p: Vec2) -> VertexResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(VertexError::InvalidShape(format!("{name} is not finite: {p}")))
    }
}

pub(crate) fn finite(name: &str, v: f32) -> VertexResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(VertexError::InvalidShape(format!("{name} is not finite: {v}")))
    }
}

pub(crate) fn non_negative(name: &str, v: f32) -> VertexResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(VertexError::InvalidShape(format!(
            "{name} must be non-negative and finite: {v}"
        )))
    }
}
