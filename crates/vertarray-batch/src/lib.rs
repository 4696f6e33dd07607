//! # vertarray-batch
//!
//! Render batches: bundles of typed buffers that are rebuilt, cleared and
//! merged as one unit.
//!
//! - [`Batch`] — the clear/extend contract.
//! - [`LayerBatch`], [`SideBatch`], [`ViaBatch`] — the fixed bundles.
//! - [`BatchMap`] — batches keyed by layer or side; itself a [`Batch`],
//!   so whole scenes merge with one call.

pub mod batch;
pub mod map;

pub use batch::{Batch, LayerBatch, SideBatch, ViaBatch};
pub use map::BatchMap;
