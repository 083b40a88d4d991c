//! Fixed-radius circle detection for laser-triangulation scan profiles.
//!
//! A bounded, weighted circular Hough transform: each measured point votes
//! for the grid of candidate circle centers that could sit at the target
//! radius from it, weighted by a triangular kernel around that radius. The
//! best-scoring bin after one pass over a profile is the center estimate.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any sensor API or rendering layer; callers feed it one
//! [`Profile`] per frame and read back a [`HoughResult`].

mod accumulator;
mod dist;
mod error;
mod grid;
mod logger;
mod profile;

pub use accumulator::{CircleHough, HoughConstraints, HoughResult};
pub use dist::TriangleDist;
pub use error::{Axis, ConfigError};
pub use logger::init_with_level;
pub use profile::{Profile, ProfilePoint};
