//! Affine projection between buffers.
//!
//! Used to instance one pre-built record run (a glyph string, a footprint
//! outline) at many placements: the source is walked once per placement
//! and each record is written to the destination through a [`Mat2x3`].

use bytemuck::Pod;
use vertarray_math::{Mat2x3, Vec2};
use vertarray_types::VertexResult;

use crate::buffer::VertexBuffer;
use crate::records::{TexVertex, TraceInstance, XyVertex};

/// Records whose positional fields can be mapped through an affine
/// transform.
pub trait Project: Pod {
    /// Returns a copy with positions transformed and every other field
    /// unchanged.
    fn project(&self, m: &Mat2x3) -> Self;
}

impl Project for XyVertex {
    #[inline]
    fn project(&self, m: &Mat2x3) -> Self {
        m.transform_point(self.position()).into()
    }
}

impl Project for TexVertex {
    #[inline]
    fn project(&self, m: &Mat2x3) -> Self {
        let p = m.transform_point(self.position());
        Self {
            x: p.x,
            y: p.y,
            tx: self.tx,
            ty: self.ty,
        }
    }
}

impl Project for TraceInstance {
    #[inline]
    fn project(&self, m: &Mat2x3) -> Self {
        let a = m.transform_point(Vec2::new(self.ax, self.ay));
        let b = m.transform_point(Vec2::new(self.bx, self.by));
        Self {
            ax: a.x,
            ay: a.y,
            bx: b.x,
            by: b.y,
            t: self.t,
        }
    }
}

impl<T: Project> VertexBuffer<T> {
    /// Appends every committed record of `src`, transformed by `m`.
    ///
    /// Capacity is ensured once for the whole source, and the cursor and
    /// count are updated once after the copy.
    pub fn extend_projected(&mut self, src: &VertexBuffer<T>, m: &Mat2x3) -> VertexResult<()> {
        self.extend_projected_slice(src.as_slice(), m)
    }

    /// Appends `records`, transformed by `m`.
    pub fn extend_projected_slice(&mut self, records: &[T], m: &Mat2x3) -> VertexResult<()> {
        let n = records.len();
        self.ensure_capacity(n)?;
        for (dst, src) in self.slots_mut(n).iter_mut().zip(records) {
            *dst = src.project(m);
        }
        self.advance(n);
        Ok(())
    }
}
