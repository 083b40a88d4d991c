//! Discretized search space for circle-center coordinates.
//!
//! Each axis is an [`AxisConstraint`]: inclusive integer bounds plus a
//! uniform step, with the bin count derived once at construction. The
//! accumulator materializes a coordinate lookup table per axis so the inner
//! voting loop never recomputes bin centers.

use crate::error::{Axis, ConfigError};

/// One dimension of the search grid. Immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct AxisConstraint {
    lower: i32,
    step: i32,
    bins: usize,
}

impl AxisConstraint {
    pub fn new(axis: Axis, lower: i32, upper: i32, step_size: u32) -> Result<Self, ConfigError> {
        if step_size == 0 {
            return Err(ConfigError::ZeroStepSize);
        }
        if lower >= upper {
            return Err(ConfigError::InvalidBounds { axis, lower, upper });
        }
        let step = step_size as i32;
        let bins = ((upper as i64 - lower as i64) / step_size as i64) as usize;
        if bins == 0 {
            return Err(ConfigError::StepExceedsRange {
                axis,
                lower,
                upper,
                step: step_size,
            });
        }
        Ok(Self { lower, step, bins })
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Ascending bin-center coordinates: entry `i` is `lower + i * step`.
    pub fn coordinates(&self) -> Vec<i32> {
        (0..self.bins)
            .map(|i| self.lower + i as i32 * self.step)
            .collect()
    }

    /// Map a coordinate to the nearest-or-lower bin index, saturating into
    /// `[0, bins - 1]`.
    ///
    /// The clamping is deliberate: callers pass unbounded search-window
    /// edges here and get back a safe array index, so out-of-range input
    /// collapses to the nearest grid edge rather than signaling an error.
    /// Takes i64 so window edges derived from points anywhere in the i32
    /// domain can be formed without overflow.
    pub fn index_of(&self, point: i64) -> usize {
        let i = (point - i64::from(self.lower)) / i64::from(self.step);
        i.clamp(0, self.bins as i64 - 1) as usize
    }
}
