//! Growth and tessellation defaults.

/// Capacity a zero-sized buffer grows to on its first growth.
pub const MIN_GROWTH_CAPACITY: usize = 1024;

/// Default multiplier applied to capacity on each growth step.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Largest byte size a single allocation may reach.
pub const MAX_ALLOCATION_BYTES: usize = isize::MAX as usize;

/// Default step count for full circles.
pub const DEFAULT_CIRCLE_STEPS: usize = 32;

/// Default step count for arcs.
pub const DEFAULT_ARC_STEPS: usize = 4;

/// Default step count for each rounded-rectangle corner.
pub const DEFAULT_CORNER_STEPS: usize = 4;
