//! Input point-cloud types.
//!
//! One [`Profile`] holds a single frame of measured points from a
//! laser-triangulation sensor. The kernel only reads point positions;
//! brightness and the source-channel id are carried opaquely for callers
//! that thread sensor metadata through their pipeline.

use serde::{Deserialize, Serialize};

/// One measured 2-D position in caller units (the reference application
/// uses 1/1000 inches).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: i32,
    pub y: i32,
    /// Sensor intensity at this point; never interpreted by the kernel.
    pub brightness: i32,
}

impl ProfilePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            brightness: 0,
        }
    }
}

/// One frame of points to search for a circle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Source channel (e.g. which camera); not interpreted by the kernel.
    pub camera: u32,
    pub points: Vec<ProfilePoint>,
}

impl Profile {
    /// Build a profile from bare `(x, y)` coordinates.
    pub fn from_points<I>(camera: u32, points: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self {
            camera,
            points: points
                .into_iter()
                .map(|(x, y)| ProfilePoint::new(x, y))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
