//! Kernel density estimation.
//!
//! ## Purpose
//!
//! This module produces the smoothed density curves behind every violin
//! plot: for each point of an evaluation grid, the density is the arithmetic
//! mean of bandwidth-scaled kernel contributions over the whole sample.
//!
//! ## Design notes
//!
//! * **Convention**: Each contribution is `K((x - v) / h) / h`; the mean of
//!   those contributions is the density estimate at `x`.
//! * **Empty samples**: An empty sample yields an all-zero curve. The mean
//!   over zero observations is treated as 0, never NaN, so a chart panel
//!   with no data draws a flat curve instead of corrupting the scale.
//! * **No bandwidth selection**: The bandwidth is caller-supplied; the
//!   source charts always passed a hand-picked constant.
//!
//! ## Invariants
//!
//! * The curve has exactly one entry per grid point, in grid order.
//! * Every density value is finite and non-negative.
//!
//! ## Non-goals
//!
//! * This module does not validate the grid or bandwidth (see the validator).
//! * This module does not scale densities to pixel widths; that is chart policy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::Kernel;

// ============================================================================
// Curve Types
// ============================================================================

/// One evaluated point of a density curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPoint<T> {
    /// Grid position the density was evaluated at.
    pub x: T,

    /// Estimated density at `x`; always finite and non-negative.
    pub density: T,
}

/// A kernel density estimate evaluated over a fixed grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve<T> {
    /// Evaluated points in grid order.
    pub points: Vec<DensityPoint<T>>,
}

impl<T: Float> DensityCurve<T> {
    /// Number of evaluated grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest density value on the curve, or zero for an empty curve.
    ///
    /// Violin plots scale their half-width to this value.
    pub fn max_density(&self) -> T {
        self.points
            .iter()
            .fold(T::zero(), |acc, p| acc.max(p.density))
    }

    /// Numerically integrate the curve over its grid using the trapezoid rule.
    ///
    /// For a grid wide enough to cover the kernel support, the result is
    /// approximately 1.
    pub fn integrate(&self) -> T {
        let half = T::from(0.5).unwrap_or_else(T::one);
        let mut area = T::zero();
        for w in self.points.windows(2) {
            let dx = w[1].x - w[0].x;
            area = area + half * dx * (w[0].density + w[1].density);
        }
        area
    }
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate the density of `sample` at each point of `grid` with the given
/// kernel and bandwidth.
///
/// Inputs are assumed validated: `bandwidth > 0` and `grid` ascending.
/// An empty sample produces an all-zero curve.
pub fn estimate_density<T: Float>(
    sample: &[T],
    grid: &[T],
    kernel: Kernel,
    bandwidth: T,
) -> DensityCurve<T> {
    let n = sample.len();

    // Guard: mean over zero observations is 0 by convention, not NaN
    if n == 0 {
        return DensityCurve {
            points: grid
                .iter()
                .map(|&x| DensityPoint {
                    x,
                    density: T::zero(),
                })
                .collect(),
        };
    }

    let count = T::from(n).unwrap_or_else(T::one);

    let points = grid
        .iter()
        .map(|&x| {
            let mut sum = T::zero();
            for &v in sample {
                sum = sum + kernel.density_contribution(x - v, bandwidth);
            }
            DensityPoint {
                x,
                density: sum / count,
            }
        })
        .collect();

    DensityCurve { points }
}
