//! Growable, stride-typed vertex buffer.
//!
//! A [`VertexBuffer<T>`] owns a contiguous run of `capacity` records of a
//! single `#[repr(C)]` type, a write cursor, and a high-water mark
//! (`count`). The record type fixes the stride, so a buffer can never be
//! written with the wrong layout.
//!
//! ```text
//! | committed (0..count)          | allocated, unused |
//! |---------------------|---------|-------------------|
//! 0                   cursor    count             capacity
//! ```
//!
//! The cursor may be rewound with [`VertexBuffer::seek`] to overwrite
//! committed records; `count` never shrinks except through
//! [`VertexBuffer::clear`].

use std::mem;

use bytemuck::{Pod, Zeroable};
use tracing::debug;
use vertarray_types::{VertexError, VertexResult};

use crate::policy::GrowthPolicy;

/// A growable buffer of `T` records with cursor and high-water mark.
#[derive(Debug, Clone)]
pub struct VertexBuffer<T: Pod> {
    /// Record storage. `data.len()` is the capacity; every slot is
    /// initialised (zeroed on allocation).
    data: Vec<T>,
    /// Next write position.
    cursor: usize,
    /// Highest position the cursor has reached.
    count: usize,
    /// Growth configuration fixed at construction.
    policy: GrowthPolicy,
}

impl<T: Pod> VertexBuffer<T> {
    /// Creates an empty buffer with zero capacity and the default policy.
    ///
    /// No memory is allocated until the first append.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            cursor: 0,
            count: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Creates a buffer with room for `capacity` records and the default
    /// growth policy.
    pub fn with_capacity(capacity: usize) -> VertexResult<Self> {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    /// Creates a buffer with room for `capacity` records and a custom
    /// growth policy.
    ///
    /// # Errors
    /// - [`VertexError::InvalidConfig`] if the policy is invalid or `T` is
    ///   zero-sized.
    /// - [`VertexError::Overflow`] if `capacity * stride` exceeds the
    ///   policy's ceiling.
    /// - [`VertexError::Allocation`] if the allocator refuses.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> VertexResult<Self> {
        policy.validate()?;
        let stride = mem::size_of::<T>();
        if stride == 0 {
            return Err(VertexError::InvalidConfig(
                "zero-sized record types cannot be buffered".into(),
            ));
        }
        if !policy.fits(capacity, stride) {
            return Err(VertexError::Overflow {
                requested: capacity,
                stride,
            });
        }

        let mut buffer = Self {
            data: Vec::new(),
            cursor: 0,
            count: 0,
            policy,
        };
        buffer.reallocate(capacity)?;
        Ok(buffer)
    }

    /// Creates a buffer holding a copy of `records`, with the cursor at
    /// the end.
    pub fn from_slice(records: &[T]) -> VertexResult<Self> {
        let mut buffer = Self::with_capacity(records.len())?;
        buffer.extend_from_slice(records)?;
        Ok(buffer)
    }

    /// Byte size of one record.
    #[inline]
    pub fn stride(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Number of allocated record slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// High-water mark: number of committed records.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing has been committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current write position.
    #[inline]
    pub fn tell(&self) -> usize {
        self.cursor
    }

    /// Size of the committed region in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.count * self.stride()
    }

    /// The growth policy this buffer was built with.
    #[inline]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Makes sure `additional` records can be written at the cursor
    /// without another growth.
    ///
    /// Growth multiplies the capacity by the policy's factor (starting from
    /// `min_capacity` when empty) until it covers `cursor + additional`.
    /// The whole previously allocated region is carried over.
    ///
    /// # Errors
    /// [`VertexError::Overflow`] if the target size cannot be represented
    /// under the ceiling, [`VertexError::Allocation`] if the allocator
    /// refuses. The buffer is unchanged on error.
    pub fn ensure_capacity(&mut self, additional: usize) -> VertexResult<()> {
        let stride = self.stride();
        let required = self
            .cursor
            .checked_add(additional)
            .ok_or(VertexError::Overflow {
                requested: usize::MAX,
                stride,
            })?;

        if required <= self.capacity() {
            return Ok(());
        }

        let new_capacity = self
            .policy
            .next_capacity(self.capacity(), required, stride)?;
        self.reallocate(new_capacity)
    }

    /// Grows storage to exactly `new_capacity` zeroed-or-preserved slots.
    fn reallocate(&mut self, new_capacity: usize) -> VertexResult<()> {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            return Ok(());
        }

        let bytes = new_capacity * self.stride();
        self.data
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| VertexError::Allocation { bytes })?;
        self.data.resize(new_capacity, <T as Zeroable>::zeroed());

        debug!(
            old_capacity,
            new_capacity,
            stride = self.stride(),
            "vertex buffer grew"
        );
        Ok(())
    }

    /// Writes at the cursor. Capacity must already be ensured.
    #[inline]
    fn write(&mut self, record: T) {
        self.data[self.cursor] = record;
        self.advance(1);
    }

    /// Moves the cursor forward by `n`, raising the high-water mark.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.cursor += n;
        if self.count < self.cursor {
            self.count = self.cursor;
        }
    }

    /// The `n` slots starting at the cursor. Capacity must already be
    /// ensured.
    #[inline]
    pub(crate) fn slots_mut(&mut self, n: usize) -> &mut [T] {
        let start = self.cursor;
        &mut self.data[start..start + n]
    }

    /// Appends one record at the cursor, growing if needed.
    pub fn push(&mut self, record: T) -> VertexResult<()> {
        self.ensure_capacity(1)?;
        self.write(record);
        Ok(())
    }

    /// Ensures room for `n` records and returns a writer that appends them
    /// without further capacity checks.
    ///
    /// # Example
    /// ```
    /// use vertarray_buffer::{XyBuffer, XyVertex};
    /// let mut buf = XyBuffer::new();
    /// let mut w = buf.reserve(2).unwrap();
    /// w.push(XyVertex::new(0.0, 0.0));
    /// w.push(XyVertex::new(1.0, 1.0));
    /// assert_eq!(buf.len(), 2);
    /// ```
    pub fn reserve(&mut self, n: usize) -> VertexResult<Reserved<'_, T>> {
        self.ensure_capacity(n)?;
        Ok(Reserved {
            buffer: self,
            remaining: n,
        })
    }

    /// Appends a slice of records at the cursor.
    pub fn extend_from_slice(&mut self, records: &[T]) -> VertexResult<()> {
        self.ensure_capacity(records.len())?;
        self.slots_mut(records.len()).copy_from_slice(records);
        self.advance(records.len());
        Ok(())
    }

    /// Appends every committed record of `other` at the cursor.
    ///
    /// Both buffers hold the same record type, so strides always match.
    pub fn extend_from_buffer(&mut self, other: &VertexBuffer<T>) -> VertexResult<()> {
        self.extend_from_slice(other.as_slice())
    }

    /// Moves the cursor to `position`, raising the high-water mark if the
    /// cursor moves past it.
    ///
    /// # Errors
    /// [`VertexError::OutOfBounds`] unless `position < capacity`.
    pub fn seek(&mut self, position: usize) -> VertexResult<()> {
        if position >= self.capacity() {
            return Err(VertexError::OutOfBounds {
                position,
                capacity: self.capacity(),
            });
        }
        self.cursor = position;
        if self.count < position {
            self.count = position;
        }
        Ok(())
    }

    /// Resets cursor and count to zero. Capacity is kept.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.count = 0;
    }

    /// Returns the committed records.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.count]
    }

    /// Returns committed record `i`, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Iterates over committed records.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Borrows the committed region for hand-off to a rendering backend.
    ///
    /// The view borrows the buffer, so it cannot outlive the next append,
    /// seek, clear or growth.
    pub fn raw_view(&self) -> RawView<'_, T> {
        RawView {
            records: self.as_slice(),
        }
    }
}

impl<T: Pod> Default for VertexBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer over a region whose capacity was ensured up front.
///
/// Returned by [`VertexBuffer::reserve`]. Each `push` writes at the
/// buffer's cursor and advances it.
pub struct Reserved<'a, T: Pod> {
    buffer: &'a mut VertexBuffer<T>,
    remaining: usize,
}

impl<T: Pod> Reserved<'_, T> {
    /// Appends one record.
    ///
    /// # Panics
    /// If more records are pushed than were reserved and the buffer has no
    /// spare capacity left.
    #[inline]
    pub fn push(&mut self, record: T) {
        debug_assert!(self.remaining > 0, "pushed past reservation");
        self.buffer.write(record);
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Number of reserved slots not yet written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Borrowed view of a buffer's committed records.
///
/// The backend reads exactly `count() * stride()` bytes starting at
/// `as_ptr()`.
#[derive(Debug, Clone, Copy)]
pub struct RawView<'a, T: Pod> {
    records: &'a [T],
}

impl<'a, T: Pod> RawView<'a, T> {
    /// Start of the committed region.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.records.as_ptr().cast()
    }

    /// Number of committed records.
    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Byte size of one record.
    #[inline]
    pub fn stride(&self) -> usize {
        mem::size_of::<T>()
    }

    /// The committed records as typed values.
    #[inline]
    pub fn records(&self) -> &'a [T] {
        self.records
    }

    /// The committed region as bytes, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.records)
    }
}
