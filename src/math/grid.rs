//! Evaluation-grid construction for density curves and threshold sweeps.
//!
//! ## Purpose
//!
//! This module builds the ordered x-grids that density curves are evaluated
//! on and that threshold sweeps iterate over. The charting layer used axis
//! ticks for this; here the grids are explicit values so the statistics core
//! takes no dependency on any axis or scale state.
//!
//! ## Design notes
//!
//! * **Inclusive endpoints**: `linspace` always includes both ends of the range.
//! * **Margin**: `covering` widens the sample range so compact kernels do not
//!   get clipped at the extremes of the data.
//! * **Stepped grids**: `stepped` mirrors a fixed-increment slider sweep and
//!   includes the upper end when the step lands on it (within tolerance).
//!
//! ## Invariants
//!
//! * All returned grids are sorted ascending with no NaN values.
//! * `linspace(a, b, n)` has exactly `n` points for `n >= 2`.
//!
//! ## Non-goals
//!
//! * This module does not produce "nice" human-readable tick labels.
//! * This module does not validate grids supplied by callers (see the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Construction
// ============================================================================

/// Build an evenly spaced grid of `points` values from `start` to `stop`,
/// inclusive on both ends.
///
/// A request for fewer than 2 points yields a single-point grid at `start`.
pub fn linspace<T: Float>(start: T, stop: T, points: usize) -> Vec<T> {
    if points < 2 {
        return vec![start];
    }

    let n = T::from(points - 1).unwrap_or_else(T::one);
    let span = stop - start;

    (0..points)
        .map(|i| {
            let frac = T::from(i).unwrap_or_else(T::zero) / n;
            start + span * frac
        })
        .collect()
}

/// Build a grid covering the range of `sample`, widened by `margin_frac`
/// of the span on each side.
///
/// Returns an empty grid for an empty sample. A zero-span sample (all
/// values equal) still gets a usable grid by falling back to a unit span.
pub fn covering<T: Float>(sample: &[T], points: usize, margin_frac: T) -> Vec<T> {
    if sample.is_empty() {
        return Vec::new();
    }

    let mut min = sample[0];
    let mut max = sample[0];
    for &v in &sample[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    // Constant sample: widen to a unit span so the grid is usable
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        let half = T::from(0.5).unwrap_or_else(T::one);
        (min - half, max + half)
    };

    let margin = (hi - lo) * margin_frac;
    linspace(lo - margin, hi + margin, points)
}

/// Build a fixed-increment grid from `start` to `stop` with step `step`.
///
/// The upper end is included when a step lands on it; a small tolerance
/// absorbs accumulated floating-point error, matching the `max + 0.0001`
/// guard the threshold slider used.
pub fn stepped<T: Float>(start: T, stop: T, step: T) -> Vec<T> {
    let mut grid = Vec::new();
    let tolerance = step * T::from(1e-4).unwrap_or_else(T::zero);

    let mut i = 0usize;
    loop {
        let x = start + step * T::from(i).unwrap_or_else(T::zero);
        if x > stop + tolerance {
            break;
        }
        grid.push(x);
        i += 1;
    }

    grid
}
