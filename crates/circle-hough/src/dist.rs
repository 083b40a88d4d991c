//! Symmetric triangular distribution used as the radial voting kernel.
//!
//! The distribution peaks at the target radius and decays linearly to zero
//! one grid step away, so the grid resolution doubles as the tolerance for
//! radius measurement noise.

/// Symmetric triangular pdf with mean `mu` and half-width `sigma`.
#[derive(Clone, Copy, Debug)]
pub struct TriangleDist {
    mu: f64,
    sigma: f64,
    // division replaced by multiplication on the hot path
    inv_sigma: f64,
}

impl TriangleDist {
    /// `sigma` must be strictly positive; the accumulator's configuration
    /// checks guarantee this before construction.
    pub fn new(mu: f64, sigma: f64) -> Self {
        debug_assert!(sigma > 0.0);
        Self {
            mu,
            sigma,
            inv_sigma: 1.0 / sigma,
        }
    }

    /// Density at `x`: `1/sigma` at `x == mu`, linearly decaying to zero at
    /// `mu ± sigma`, zero outside that support.
    pub fn density(&self, x: f64) -> f64 {
        if (x - self.mu).abs() > self.sigma {
            return 0.0;
        }
        (1.0 - ((x - self.mu) * self.inv_sigma).abs()) * self.inv_sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_at_mean_is_one_over_sigma() {
        let d = TriangleDist::new(810.0, 50.0);
        assert_relative_eq!(d.density(810.0), 1.0 / 50.0);
    }

    #[test]
    fn zero_at_support_edges_and_beyond() {
        let d = TriangleDist::new(810.0, 50.0);
        assert_relative_eq!(d.density(760.0), 0.0);
        assert_relative_eq!(d.density(860.0), 0.0);
        assert_eq!(d.density(1000.0), 0.0);
        assert_eq!(d.density(0.0), 0.0);
    }

    #[test]
    fn symmetric_within_support() {
        let d = TriangleDist::new(810.0, 50.0);
        for off in [1.0, 12.5, 25.0, 49.0] {
            assert_relative_eq!(d.density(810.0 + off), d.density(810.0 - off));
        }
    }

    #[test]
    fn linear_decay() {
        let d = TriangleDist::new(100.0, 10.0);
        // halfway out the density is half the peak
        assert_relative_eq!(d.density(105.0), 0.05);
        assert_relative_eq!(d.density(95.0), 0.05);
    }
}
