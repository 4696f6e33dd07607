//! Textured quads for glyph runs.

use vertarray_buffer::{TexBuffer, TexVertex};
use vertarray_math::Vec2;
use vertarray_types::VertexResult;

use crate::validate::finite_point;

/// Vertices emitted per glyph quad (two triangles).
pub const GLYPH_VERTEX_COUNT: usize = 6;

/// Appends a textured quad as two triangles.
///
/// `min`/`max` are opposite corners in position space and
/// `uv_min`/`uv_max` the matching atlas coordinates. The triangles are
/// `(x0,y0) (x0,y1) (x1,y0)` and `(x1,y0) (x0,y1) (x1,y1)`.
pub fn glyph_quad(
    buf: &mut TexBuffer,
    min: Vec2,
    max: Vec2,
    uv_min: Vec2,
    uv_max: Vec2,
) -> VertexResult<()> {
    finite_point("quad min", min)?;
    finite_point("quad max", max)?;
    finite_point("uv min", uv_min)?;
    finite_point("uv max", uv_max)?;

    let v00 = TexVertex::new(min.x, min.y, uv_min.x, uv_min.y);
    let v01 = TexVertex::new(min.x, max.y, uv_min.x, uv_max.y);
    let v10 = TexVertex::new(max.x, min.y, uv_max.x, uv_min.y);
    let v11 = TexVertex::new(max.x, max.y, uv_max.x, uv_max.y);

    let mut w = buf.reserve(GLYPH_VERTEX_COUNT)?;
    for v in [v00, v01, v10, v10, v01, v11] {
        w.push(v);
    }
    Ok(())
}
