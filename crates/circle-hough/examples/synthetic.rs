//! Run the accumulator on a synthetic scan profile.
//!
//! Stands in for a sensor feed: samples noisy points on the upper arc of a
//! circle of known radius, then asks the accumulator for the center.

use std::f64::consts::PI;

use log::{info, LevelFilter};

use circle_hough::{init_with_level, CircleHough, HoughConstraints, Profile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Debug)?;

    let radius = 810;
    let constraints = HoughConstraints {
        step_size: 50,
        x_lower: -15000,
        x_upper: 15000,
        y_lower: -30000,
        y_upper: 30000,
    };
    let mut ch = CircleHough::new(radius, &constraints)?;

    let (cx, cy) = (1250, -3800);
    let n = 256;
    let points = (0..n).map(|k| {
        let angle = PI * (k as f64 / n as f64);
        // deterministic pseudo-noise, a few thousandths of an inch
        let jitter = 7.0 * (13.0 * angle).sin();
        let x = cx as f64 + (radius as f64 + jitter) * angle.cos();
        let y = cy as f64 + (radius as f64 + jitter) * angle.sin();
        (x.round() as i32, y.round() as i32)
    });
    let profile = Profile::from_points(0, points);

    info!(
        "searching {} points for a circle of radius {}",
        profile.len(),
        ch.radius()
    );
    let res = ch.calculate(&profile);
    info!(
        "estimated center ({}, {}) with weight {:.3} (true center ({cx}, {cy}))",
        res.x, res.y, res.weight
    );

    Ok(())
}
