//! # vertarray-shapes
//!
//! Shape generators that write line-list geometry into vertarray buffers.
//!
//! Every generator checks its parameters, reserves its full vertex count
//! once, then writes without further capacity checks. Nothing is written
//! when a call fails.
//!
//! - [`outline`] — lines, axis-aligned and rotated boxes, rounded
//!   rectangles.
//! - [`curve`] — circles and arcs.
//! - [`glyph`] — textured quads for text runs.

pub mod curve;
pub mod glyph;
pub mod outline;
mod validate;

pub use curve::{arc, circle, curve_emitted_count, curve_vertex_count};
pub use glyph::glyph_quad;
pub use outline::{aligned_box, line, rotated_box, round_rect, round_rect_vertex_count};
