use serde::{Deserialize, Serialize};

/// Search-grid axis, for error reporting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised while validating an accumulator configuration.
///
/// These are the only failures the kernel can produce; once constructed, a
/// [`crate::CircleHough`] cannot fail at runtime.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{axis} axis bounds invalid (lower={lower}, upper={upper})")]
    InvalidBounds { axis: Axis, lower: i32, upper: i32 },
    #[error("step size must be positive")]
    ZeroStepSize,
    #[error("step size {step} does not fit the {axis} range [{lower}, {upper})")]
    StepExceedsRange {
        axis: Axis,
        lower: i32,
        upper: i32,
        step: u32,
    },
    #[error("radius must be positive (got {0})")]
    NonPositiveRadius(i32),
}
