//! Circle and arc tessellation.
//!
//! A curve drawn with `n_step` steps is sampled at `n_step + 1` evenly
//! spaced angles, `start + sweep * i / n_step`. Samples are emitted in
//! line-list order: the first and last sample once, every interior sample
//! twice (end of one segment, start of the next), so a curve emits
//! `2 * n_step` vertices. `n_step == 0` draws a single chord from the
//! start angle to the end angle.
//!
//! Space for `2 * (n_step + 1)` vertices is reserved up front; the unused
//! tail stays uncommitted.

use std::f32::consts::TAU;

use vertarray_buffer::{Reserved, XyBuffer, XyVertex};
use vertarray_math::Vec2;
use vertarray_types::{VertexError, VertexResult};

use crate::validate::{finite, finite_point, non_negative};

/// Vertices reserved for one curve of `n_step` steps.
///
/// This is an upper bound on what the curve writes; see
/// [`curve_emitted_count`]. Returns `None` if the count does not fit in
/// `usize`.
#[inline]
pub fn curve_vertex_count(n_step: usize) -> Option<usize> {
    n_step.checked_add(1)?.checked_mul(2)
}

/// Vertices actually committed by one curve of `n_step` steps.
#[inline]
pub fn curve_emitted_count(n_step: usize) -> Option<usize> {
    n_step.max(1).checked_mul(2)
}

pub(crate) fn checked_curve_count(n_step: usize) -> VertexResult<usize> {
    curve_vertex_count(n_step).ok_or(VertexError::Overflow {
        requested: usize::MAX,
        stride: std::mem::size_of::<XyVertex>(),
    })
}

/// Writes one tessellated arc into reserved space.
///
/// Sweeps `sweep` radians counter-clockwise (in a y-up frame) from
/// `start`.
pub(crate) fn emit_arc(
    w: &mut Reserved<'_, XyVertex>,
    center: Vec2,
    r: f32,
    start: f32,
    sweep: f32,
    n_step: usize,
) {
    let segments = n_step.max(1);
    for i in 0..=segments {
        let theta = start + sweep * (i as f32 / segments as f32);
        let p = XyVertex::from(center + Vec2::from_angle(theta) * r);
        w.push(p);
        if i != 0 && i != segments {
            w.push(p);
        }
    }
}

/// Appends a full circle as a closed line list.
///
/// The first vertex sits at angle 0 and the last one closes the loop on
/// top of it.
///
/// # Example
/// ```
/// use vertarray_buffer::XyBuffer;
/// use vertarray_math::Vec2;
/// use vertarray_shapes::curve::circle;
/// let mut buf = XyBuffer::new();
/// circle(&mut buf, Vec2::ZERO, 1.0, 4).unwrap();
/// assert_eq!(buf.len(), 8);
/// assert!((buf.as_slice()[1].y - 1.0).abs() < 1e-6);
/// ```
pub fn circle(buf: &mut XyBuffer, center: Vec2, r: f32, n_step: usize) -> VertexResult<()> {
    finite_point("circle center", center)?;
    non_negative("circle radius", r)?;

    let n = checked_curve_count(n_step)?;
    let mut w = buf.reserve(n)?;
    emit_arc(&mut w, center, r, 0.0, TAU, n_step);
    Ok(())
}

/// Appends an arc from `theta0` to `theta1`.
///
/// The arc is always swept counter-clockwise from `theta0`: a negative
/// difference is wrapped by adding a full turn.
pub fn arc(
    buf: &mut XyBuffer,
    center: Vec2,
    r: f32,
    theta0: f32,
    theta1: f32,
    n_step: usize,
) -> VertexResult<()> {
    finite_point("arc center", center)?;
    non_negative("arc radius", r)?;
    finite("arc start angle", theta0)?;
    finite("arc end angle", theta1)?;

    let mut sweep = theta1 - theta0;
    if sweep < 0.0 {
        sweep += TAU;
    }

    let n = checked_curve_count(n_step)?;
    let mut w = buf.reserve(n)?;
    emit_arc(&mut w, center, r, theta0, sweep, n_step);
    Ok(())
}
