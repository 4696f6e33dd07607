//! Straight-edged outlines: lines, boxes and rounded rectangles.
//!
//! Every edge is an independent two-vertex line, so a box is always
//! eight vertices regardless of rotation.

use std::f32::consts::FRAC_PI_2;

use vertarray_buffer::{Reserved, XyBuffer, XyVertex};
use vertarray_math::Vec2;
use vertarray_types::{VertexError, VertexResult};

use crate::curve::{checked_curve_count, emit_arc};
use crate::validate::{finite, finite_point, non_negative};

/// Vertices emitted by a box outline.
pub const BOX_VERTEX_COUNT: usize = 8;

#[inline]
fn edge(w: &mut Reserved<'_, XyVertex>, a: Vec2, b: Vec2) {
    w.push(a.into());
    w.push(b.into());
}

/// Appends a single segment from `a` to `b`.
pub fn line(buf: &mut XyBuffer, a: Vec2, b: Vec2) -> VertexResult<()> {
    finite_point("line start", a)?;
    finite_point("line end", b)?;

    let mut w = buf.reserve(2)?;
    edge(&mut w, a, b);
    Ok(())
}

/// Appends the outline of an axis-aligned box of size `w × h` centred at
/// `center`.
///
/// Edges are emitted bottom, right, top, left.
pub fn aligned_box(buf: &mut XyBuffer, center: Vec2, w: f32, h: f32) -> VertexResult<()> {
    finite_point("box center", center)?;
    non_negative("box width", w)?;
    non_negative("box height", h)?;

    let lo = center - Vec2::new(w, h) / 2.0;
    let hi = center + Vec2::new(w, h) / 2.0;

    let mut out = buf.reserve(BOX_VERTEX_COUNT)?;
    edge(&mut out, Vec2::new(lo.x, lo.y), Vec2::new(hi.x, lo.y));
    edge(&mut out, Vec2::new(hi.x, lo.y), Vec2::new(hi.x, hi.y));
    edge(&mut out, Vec2::new(hi.x, hi.y), Vec2::new(lo.x, hi.y));
    edge(&mut out, Vec2::new(lo.x, hi.y), Vec2::new(lo.x, lo.y));
    Ok(())
}

/// Half-axis vectors of a box rotated by `theta`: `a` along the width,
/// `b` along the height.
#[inline]
fn half_axes(w: f32, h: f32, theta: f32) -> (Vec2, Vec2) {
    let dir = Vec2::from_angle(theta);
    (dir * (w / 2.0), dir.perp() * (h / 2.0))
}

/// Appends the outline of a `w × h` box centred at `center` and rotated
/// counter-clockwise by `theta` radians.
///
/// ```text
///      +b
///   3 ──── 2
///   │      │ +a
///   0 ──── 1
/// ```
///
/// With `theta == 0` the output is identical to [`aligned_box`].
pub fn rotated_box(
    buf: &mut XyBuffer,
    center: Vec2,
    w: f32,
    h: f32,
    theta: f32,
) -> VertexResult<()> {
    finite_point("box center", center)?;
    non_negative("box width", w)?;
    non_negative("box height", h)?;
    finite("box angle", theta)?;

    let (a, b) = half_axes(w, h, theta);
    let p1 = a - b;
    let p2 = a + b;

    let mut out = buf.reserve(BOX_VERTEX_COUNT)?;
    edge(&mut out, center - p2, center + p1);
    edge(&mut out, center + p1, center + p2);
    edge(&mut out, center + p2, center - p1);
    edge(&mut out, center - p1, center - p2);
    Ok(())
}

/// Vertices reserved for a rounded rectangle with `n_corner_step` steps
/// per corner, or `None` if the count does not fit in `usize`.
///
/// Each corner commits `2 * max(n_corner_step, 1)` of its
/// `2 * (n_corner_step + 1)` reserved slots.
#[inline]
pub fn round_rect_vertex_count(n_corner_step: usize) -> Option<usize> {
    crate::curve::curve_vertex_count(n_corner_step)?
        .checked_mul(4)?
        .checked_add(BOX_VERTEX_COUNT)
}

/// Appends the outline of a rounded rectangle.
///
/// The four straight edges are inset by `corner_r` and drawn first
/// (bottom, right, top, left). Then each corner is drawn as a quarter arc
/// around its inset centre, in the order `+a+b`, `−a+b`, `−a−b`, `+a−b`.
/// Corner `k` sweeps from angle `k·π/2 + theta` through a quarter turn,
/// which walks the corners counter-clockwise in a y-up frame (clockwise
/// on a y-down screen).
///
/// Corner `k` is sampled every `π/2 / n_corner_step` radians, so the
/// call emits `8 + 4 · 2 · max(n_corner_step, 1)` vertices.
///
/// # Errors
/// [`VertexError::InvalidShape`] if any parameter is not finite, a size
/// is negative, or `corner_r` exceeds half the smaller side.
pub fn round_rect(
    buf: &mut XyBuffer,
    center: Vec2,
    w: f32,
    h: f32,
    theta: f32,
    corner_r: f32,
    n_corner_step: usize,
) -> VertexResult<()> {
    finite_point("rect center", center)?;
    non_negative("rect width", w)?;
    non_negative("rect height", h)?;
    finite("rect angle", theta)?;
    non_negative("corner radius", corner_r)?;
    if corner_r > w.min(h) / 2.0 {
        return Err(VertexError::InvalidShape(format!(
            "corner radius {corner_r} exceeds half of the smaller side ({w} × {h})"
        )));
    }

    let n = checked_curve_count(n_corner_step)?
        .checked_mul(4)
        .and_then(|c| c.checked_add(BOX_VERTEX_COUNT))
        .ok_or(VertexError::Overflow {
            requested: usize::MAX,
            stride: std::mem::size_of::<XyVertex>(),
        })?;

    let (a, b) = half_axes(w, h, theta);
    let (a_c, b_c) = half_axes(w - 2.0 * corner_r, h - 2.0 * corner_r, theta);

    let mut out = buf.reserve(n)?;

    // bottom, right, top, left
    edge(&mut out, center - a_c - b, center + a_c - b);
    edge(&mut out, center + a - b_c, center + a + b_c);
    edge(&mut out, center + a_c + b, center - a_c + b);
    edge(&mut out, center - a + b_c, center - a - b_c);

    let corners = [a_c + b_c, -a_c + b_c, -a_c - b_c, a_c - b_c];
    for (k, offset) in corners.into_iter().enumerate() {
        let start = k as f32 * FRAC_PI_2 + theta;
        emit_arc(&mut out, center + offset, corner_r, start, FRAC_PI_2, n_corner_step);
    }
    Ok(())
}
