//! # vertarray-buffer
//!
//! Growable, stride-typed vertex buffers for GPU instance upload.
//!
//! ## Key Types
//!
//! - [`VertexBuffer`] — contiguous record store with a write cursor and a
//!   high-water mark. Grows by a configurable [`GrowthPolicy`].
//! - [`RawView`] — borrowed `(pointer, count, stride)` view for upload.
//! - Record layouts [`XyVertex`], [`TexVertex`], [`TraceInstance`],
//!   [`ViaInstance`] and their buffer aliases.
//! - [`Project`] — affine projection of one buffer into another.
//!
//! Buffers are single-threaded values; share work across threads by
//! filling one buffer per thread and merging with
//! [`VertexBuffer::extend_from_buffer`].

pub mod append;
pub mod buffer;
pub mod policy;
pub mod project;
pub mod records;

pub use buffer::{RawView, Reserved, VertexBuffer};
pub use policy::GrowthPolicy;
pub use project::Project;
pub use records::{
    TexBuffer, TexVertex, TraceBuffer, TraceInstance, ViaBuffer, ViaInstance, XyBuffer, XyVertex,
};
