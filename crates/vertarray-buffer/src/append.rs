//! Typed appenders.
//!
//! One convenience method per record type. Each ensures a single slot,
//! builds the record from loose fields and commits it.

use vertarray_types::{VertexError, VertexResult};

use crate::records::{
    TexBuffer, TexVertex, TraceBuffer, TraceInstance, ViaBuffer, ViaInstance, XyBuffer, XyVertex,
};

impl XyBuffer {
    /// Appends a position.
    #[inline]
    pub fn push_xy(&mut self, x: f32, y: f32) -> VertexResult<()> {
        self.push(XyVertex::new(x, y))
    }
}

impl TexBuffer {
    /// Appends a position with texture coordinate.
    #[inline]
    pub fn push_tex(&mut self, x: f32, y: f32, tx: f32, ty: f32) -> VertexResult<()> {
        self.push(TexVertex::new(x, y, tx, ty))
    }
}

impl TraceBuffer {
    /// Appends a trace segment from `(ax, ay)` to `(bx, by)` with
    /// thickness `t`.
    #[inline]
    pub fn push_trace(&mut self, ax: f32, ay: f32, bx: f32, by: f32, t: f32) -> VertexResult<()> {
        self.push(TraceInstance::new(ax, ay, bx, by, t))
    }
}

impl ViaBuffer {
    /// Appends a via centred at `(x, y)` with outer radius `r` and inner
    /// radius `r_inside`, storing `(r_inside / r)²`.
    ///
    /// # Errors
    /// [`VertexError::InvalidRecord`] if `r` is not a positive finite
    /// number or `r_inside` is negative or not finite.
    pub fn push_via(&mut self, x: f32, y: f32, r: f32, r_inside: f32) -> VertexResult<()> {
        if !(r.is_finite() && r > 0.0) {
            return Err(VertexError::InvalidRecord(format!(
                "via outer radius must be positive and finite (got {r})"
            )));
        }
        if !(r_inside.is_finite() && r_inside >= 0.0) {
            return Err(VertexError::InvalidRecord(format!(
                "via inner radius must be non-negative and finite (got {r_inside})"
            )));
        }
        self.push(ViaInstance::from_radii(x, y, r, r_inside))
    }
}
