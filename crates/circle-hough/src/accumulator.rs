//! The circle Hough accumulator.
//!
//! One [`CircleHough`] instance owns a dense 2-D vote grid over candidate
//! circle centers. Every [`CircleHough::calculate`] call zeroes the grid,
//! lets each profile point vote for the bins that could plausibly be a
//! circle center at the target radius, and returns the best bin seen.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dist::TriangleDist;
use crate::error::{Axis, ConfigError};
use crate::grid::AxisConstraint;
use crate::profile::Profile;

/// Region of interest and resolution for the center search.
///
/// Units match the profile points (the reference application uses 1/1000
/// inches). The step size applies to both axes; smaller steps increase
/// result resolution at quadratic cost in grid cells.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoughConstraints {
    pub step_size: u32,
    pub x_lower: i32,
    pub x_upper: i32,
    pub y_lower: i32,
    pub y_upper: i32,
}

/// Best-estimate circle center for one profile.
///
/// `weight` is the maximum accumulated vote; higher values imply greater
/// confidence. The default value (`weight == 0.0`, center at the origin) is
/// the well-defined "no detection" outcome, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HoughResult {
    pub weight: f64,
    pub x: i32,
    pub y: i32,
}

/// Circle Hough transform engine for a fixed target radius.
///
/// The instance exclusively owns its vote grid and coordinate tables; one
/// caller drives it one call at a time. Nothing persists across calls.
#[derive(Clone, Debug)]
pub struct CircleHough {
    cx: AxisConstraint,
    cy: AxisConstraint,
    dist: TriangleDist,
    radius: i32,
    /// Bin-center coordinates per axis, materialized once.
    bx: Vec<i32>,
    by: Vec<i32>,
    /// Row-major vote grid, `cy.bins()` rows by `cx.bins()` columns.
    bins: Vec<f64>,
}

impl CircleHough {
    /// Validate the configuration and allocate the vote grid.
    ///
    /// Fails on `radius <= 0`, a zero step size, or a lower bound not
    /// strictly below its upper bound on either axis.
    pub fn new(radius: i32, constraints: &HoughConstraints) -> Result<Self, ConfigError> {
        if radius <= 0 {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        let cx = AxisConstraint::new(
            Axis::X,
            constraints.x_lower,
            constraints.x_upper,
            constraints.step_size,
        )?;
        let cy = AxisConstraint::new(
            Axis::Y,
            constraints.y_lower,
            constraints.y_upper,
            constraints.step_size,
        )?;

        // the kernel spread equals the step, tying radius tolerance to
        // grid resolution
        let dist = TriangleDist::new(f64::from(radius), f64::from(constraints.step_size));

        let bx = cx.coordinates();
        let by = cy.coordinates();
        let bins = vec![0.0; cx.bins() * cy.bins()];

        debug!(
            "circle hough grid: {}x{} bins, radius {radius}, step {}",
            cx.bins(),
            cy.bins(),
            constraints.step_size
        );

        Ok(Self {
            cx,
            cy,
            dist,
            radius,
            bx,
            by,
            bins,
        })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Grid dimensions as `(x_bins, y_bins)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.cx.bins(), self.cy.bins())
    }

    /// Run one accumulate-and-argmax pass over a profile.
    ///
    /// The grid is zeroed first, so results never depend on earlier calls.
    /// Infallible by construction: every window edge goes through the
    /// saturating index lookup, so the inner loops cannot index out of
    /// bounds, and an empty or fully out-of-range profile simply yields the
    /// zero-confidence default result.
    pub fn calculate(&mut self, profile: &Profile) -> HoughResult {
        let mut results = HoughResult::default();

        // both axes share one step size; widened to i64 so window edges
        // formed from points anywhere in the i32 domain cannot overflow
        let step_size = i64::from(self.cx.step());
        let radius = i64::from(self.radius);
        let width = self.cx.bins();

        let upper_lim = ((radius + step_size) as f64).powi(2);
        let lower_lim = ((radius - step_size) as f64).powi(2);

        self.bins.fill(0.0);

        for p in &profile.points {
            let px = i64::from(p.x);
            let py = i64::from(p.y);
            let x_start = self.cx.index_of(px - radius - step_size);
            let x_end = self.cx.index_of(px + radius + step_size);
            let y_start = self.cy.index_of(py - radius - step_size);
            // one-sided sensor geometry: the center can only sit below the
            // measured surface, so the window stops one step above the point
            let y_end = self.cy.index_of(py + step_size);

            for y in y_start..y_end {
                let dy = (py - i64::from(self.by[y])) as f64;
                let row = y * width;
                for x in x_start..x_end {
                    let dx = (px - i64::from(self.bx[x])) as f64;
                    let r_sqr = dx * dx + dy * dy;

                    if r_sqr < lower_lim || r_sqr > upper_lim {
                        continue;
                    }

                    let r = r_sqr.sqrt();
                    let cell = &mut self.bins[row + x];
                    *cell += self.dist.density(r);
                    if *cell > results.weight {
                        results.weight = *cell;
                        results.x = self.bx[x];
                        results.y = self.by[y];
                    }
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(step: u32) -> HoughConstraints {
        HoughConstraints {
            step_size: step,
            x_lower: -15000,
            x_upper: 15000,
            y_lower: -30000,
            y_upper: 30000,
        }
    }

    #[test]
    fn reference_configuration_dimensions() {
        let ch = CircleHough::new(810, &constraints(50)).expect("valid configuration");
        assert_eq!(ch.dims(), (600, 1200));
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(matches!(
            CircleHough::new(0, &constraints(50)),
            Err(ConfigError::NonPositiveRadius(0))
        ));
        assert!(matches!(
            CircleHough::new(-810, &constraints(50)),
            Err(ConfigError::NonPositiveRadius(-810))
        ));
    }

    #[test]
    fn rejects_invalid_axis_bounds() {
        let mut c = constraints(50);
        c.y_lower = c.y_upper;
        assert!(matches!(
            CircleHough::new(810, &c),
            Err(ConfigError::InvalidBounds { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn empty_profile_yields_zero_result() {
        let mut ch = CircleHough::new(810, &constraints(50)).unwrap();
        let res = ch.calculate(&Profile::default());
        assert_eq!(res, HoughResult::default());
    }

    #[test]
    fn far_out_of_range_points_yield_zero_result() {
        let mut ch = CircleHough::new(810, &constraints(50)).unwrap();
        // every point is millions of units away from the search region, so
        // no candidate bin can lie near the target radius
        let profile = Profile::from_points(0, [(5_000_000, 5_000_000), (-7_000_000, 9_000_000)]);
        let res = ch.calculate(&profile);
        assert_eq!(res, HoughResult::default());
    }

    #[test]
    fn extreme_coordinates_yield_zero_result() {
        let mut ch = CircleHough::new(810, &constraints(50)).unwrap();
        // window edges for these points overshoot the i32 domain; they must
        // clamp to empty ranges instead of wrapping or panicking
        let profile = Profile::from_points(
            0,
            [
                (i32::MAX, 0),
                (0, i32::MIN),
                (i32::MIN, i32::MAX),
                (i32::MAX, i32::MIN),
            ],
        );
        let res = ch.calculate(&profile);
        assert_eq!(res, HoughResult::default());
    }
}
