//! Vertex and instance record layouts.
//!
//! Every record is `#[repr(C)]` with native-endian `f32` fields and no
//! padding, so a buffer's bytes can be handed to a vertex shader as-is.
//! Field order is part of the shader contract and must not change.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use vertarray_math::Vec2;

use crate::buffer::VertexBuffer;

/// Plain 2D position. 8 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct XyVertex {
    pub x: f32,
    pub y: f32,
}

/// Position plus texture coordinate. 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct TexVertex {
    pub x: f32,
    pub y: f32,
    pub tx: f32,
    pub ty: f32,
}

/// Instance data for a stroked segment from A to B. 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct TraceInstance {
    pub ax: f32,
    pub ay: f32,
    pub bx: f32,
    pub by: f32,
    /// Stroke thickness.
    pub t: f32,
}

/// Instance data for an annular disc. 16 bytes.
///
/// The shader draws a quad spanning `[-1, 1]²` around the centre and keeps
/// fragments with `r_ins_frac_sq < x² + y² < 1`, which needs no square
/// root per fragment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct ViaInstance {
    pub x: f32,
    pub y: f32,
    /// Outer radius.
    pub r: f32,
    /// `(r_inside / r)²`.
    pub r_ins_frac_sq: f32,
}

impl XyVertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for XyVertex {
    fn from(p: Vec2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl TexVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, tx: f32, ty: f32) -> Self {
        Self { x, y, tx, ty }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn tex_coord(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }
}

impl TraceInstance {
    #[inline]
    pub const fn new(ax: f32, ay: f32, bx: f32, by: f32, t: f32) -> Self {
        Self { ax, ay, bx, by, t }
    }
}

impl ViaInstance {
    /// Builds a via from its outer and inner radii.
    ///
    /// Does not validate; see [`ViaBuffer::push_via`] for the checked path.
    #[inline]
    pub fn from_radii(x: f32, y: f32, r: f32, r_inside: f32) -> Self {
        let frac = r_inside / r;
        Self {
            x,
            y,
            r,
            r_ins_frac_sq: frac * frac,
        }
    }

    /// Recovers the inner radius.
    #[inline]
    pub fn r_inside(&self) -> f32 {
        self.r * self.r_ins_frac_sq.sqrt()
    }
}

/// Buffer of plain positions (outlines, hairlines).
pub type XyBuffer = VertexBuffer<XyVertex>;

/// Buffer of textured vertices (glyph quads).
pub type TexBuffer = VertexBuffer<TexVertex>;

/// Buffer of trace instances.
pub type TraceBuffer = VertexBuffer<TraceInstance>;

/// Buffer of via instances.
pub type ViaBuffer = VertexBuffer<ViaInstance>;
