//! Fixed bundles of buffers that are filled, cleared and merged together.
//!
//! A scene is usually split into per-layer batches that are rebuilt
//! independently and then merged into one set of upload buffers. Each
//! bundle here pairs a primitive buffer with a text buffer drawn over it.

use vertarray_buffer::{TexBuffer, TraceBuffer, ViaBuffer, XyBuffer};
use vertarray_types::VertexResult;

/// A group of buffers that is cleared and merged as a unit.
pub trait Batch: Default {
    /// Resets every buffer, keeping capacity.
    fn clear(&mut self);

    /// Appends every buffer of `other` onto the matching buffer of `self`.
    fn extend(&mut self, other: &Self) -> VertexResult<()>;

    /// Total committed records across all buffers.
    fn record_count(&self) -> usize;

    /// Returns true if no buffer holds a record.
    fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// Conductive layer: stroked traces plus text.
#[derive(Debug, Clone, Default)]
pub struct LayerBatch {
    pub traces: TraceBuffer,
    pub text: TexBuffer,
}

/// Board side: hairline outlines plus text.
#[derive(Debug, Clone, Default)]
pub struct SideBatch {
    pub outlines: XyBuffer,
    pub text: TexBuffer,
}

/// Through-layer discs plus their labels.
#[derive(Debug, Clone, Default)]
pub struct ViaBatch {
    pub vias: ViaBuffer,
    pub text: TexBuffer,
}

impl LayerBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch with `capacity` slots in each buffer.
    pub fn with_capacity(capacity: usize) -> VertexResult<Self> {
        Ok(Self {
            traces: TraceBuffer::with_capacity(capacity)?,
            text: TexBuffer::with_capacity(capacity)?,
        })
    }
}

impl SideBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch with `capacity` slots in each buffer.
    pub fn with_capacity(capacity: usize) -> VertexResult<Self> {
        Ok(Self {
            outlines: XyBuffer::with_capacity(capacity)?,
            text: TexBuffer::with_capacity(capacity)?,
        })
    }
}

impl ViaBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch with `capacity` slots in each buffer.
    pub fn with_capacity(capacity: usize) -> VertexResult<Self> {
        Ok(Self {
            vias: ViaBuffer::with_capacity(capacity)?,
            text: TexBuffer::with_capacity(capacity)?,
        })
    }
}

impl Batch for LayerBatch {
    fn clear(&mut self) {
        self.traces.clear();
        self.text.clear();
    }

    fn extend(&mut self, other: &Self) -> VertexResult<()> {
        self.traces.extend_from_buffer(&other.traces)?;
        self.text.extend_from_buffer(&other.text)
    }

    fn record_count(&self) -> usize {
        self.traces.len() + self.text.len()
    }
}

impl Batch for SideBatch {
    fn clear(&mut self) {
        self.outlines.clear();
        self.text.clear();
    }

    fn extend(&mut self, other: &Self) -> VertexResult<()> {
        self.outlines.extend_from_buffer(&other.outlines)?;
        self.text.extend_from_buffer(&other.text)
    }

    fn record_count(&self) -> usize {
        self.outlines.len() + self.text.len()
    }
}

impl Batch for ViaBatch {
    fn clear(&mut self) {
        self.vias.clear();
        self.text.clear();
    }

    fn extend(&mut self, other: &Self) -> VertexResult<()> {
        self.vias.extend_from_buffer(&other.vias)?;
        self.text.extend_from_buffer(&other.text)
    }

    fn record_count(&self) -> usize {
        self.vias.len() + self.text.len()
    }
}
