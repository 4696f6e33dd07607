//! Growth policy.
//!
//! Parameters that control how a buffer grows when an append would run
//! past its capacity: the first allocation size for an empty buffer, the
//! multiplier applied per growth step, and the byte ceiling that no
//! allocation may exceed.

use serde::{Deserialize, Serialize};
use vertarray_types::constants::{DEFAULT_GROWTH_FACTOR, MAX_ALLOCATION_BYTES, MIN_GROWTH_CAPACITY};
use vertarray_types::{VertexError, VertexResult};

/// Configuration for buffer growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPolicy {
    /// Capacity (in elements) an empty buffer grows to first.
    pub min_capacity: usize,

    /// Capacity multiplier per growth step. Must be at least 2.
    pub growth_factor: usize,

    /// Upper bound on `capacity * stride` in bytes.
    pub max_bytes: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: MIN_GROWTH_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_bytes: MAX_ALLOCATION_BYTES,
        }
    }
}

impl GrowthPolicy {
    /// Small first allocation, for many short-lived buffers.
    pub fn compact() -> Self {
        Self {
            min_capacity: 64,
            ..Default::default()
        }
    }

    /// Large first allocation and fast growth, for buffers that are
    /// refilled every frame with tens of thousands of records.
    pub fn aggressive() -> Self {
        Self {
            min_capacity: 16 * 1024,
            growth_factor: 4,
            ..Default::default()
        }
    }

    /// Checks that the policy can make progress and respects the
    /// platform allocation limit.
    pub fn validate(&self) -> VertexResult<()> {
        if self.min_capacity == 0 {
            return Err(VertexError::InvalidConfig(
                "min_capacity must be at least 1".into(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(VertexError::InvalidConfig(format!(
                "growth_factor must be at least 2 (got {})",
                self.growth_factor
            )));
        }
        if self.max_bytes > MAX_ALLOCATION_BYTES {
            return Err(VertexError::InvalidConfig(format!(
                "max_bytes {} exceeds the allocation limit {}",
                self.max_bytes, MAX_ALLOCATION_BYTES
            )));
        }
        Ok(())
    }

    /// Returns true if `elements` records of `stride` bytes fit under the
    /// ceiling.
    #[inline]
    pub fn fits(&self, elements: usize, stride: usize) -> bool {
        elements
            .checked_mul(stride)
            .is_some_and(|bytes| bytes <= self.max_bytes)
    }

    /// Computes the capacity to grow to so that at least `required`
    /// elements fit.
    ///
    /// Before every multiplication the current byte size is compared
    /// against `max_bytes / growth_factor`, so the multiplied value can
    /// neither wrap nor pass the ceiling.
    pub fn next_capacity(
        &self,
        current: usize,
        required: usize,
        stride: usize,
    ) -> VertexResult<usize> {
        let overflow = VertexError::Overflow {
            requested: required,
            stride,
        };

        let mut capacity = if current == 0 {
            self.min_capacity
        } else {
            current
        };
        if !self.fits(capacity, stride) {
            return Err(overflow);
        }

        let limit = self.max_bytes / self.growth_factor;
        while capacity < required {
            // capacity * stride was checked by `fits` or the previous round
            if capacity * stride > limit {
                return Err(overflow);
            }
            capacity *= self.growth_factor;
        }

        Ok(capacity)
    }
}
