//! Threshold sweeps over flagged observations.
//!
//! ## Purpose
//!
//! This module computes the risk curve behind the threshold slider chart:
//! for each threshold in a stepped sweep, the proportion of flagged (e.g.,
//! diagnosed) observations among all observations at or above the threshold.
//!
//! ## Design notes
//!
//! * **Empty subsets**: A threshold above every observation has proportion 0,
//!   not NaN; the curve stays drawable across the whole sweep.
//! * **Sweep bounds**: The sweep runs from the sample minimum to the sample
//!   maximum in fixed increments, the same range the slider exposes.
//!
//! ## Invariants
//!
//! * Proportions are in `[0, 1]`.
//! * Thresholds are strictly ascending.
//!
//! ## Non-goals
//!
//! * This module does not pick the clinically relevant threshold; it reports
//!   the whole curve.
//! * This module does not smooth or interpolate between thresholds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::grid::stepped;
use crate::primitives::errors::StatError;

// ============================================================================
// Curve Types
// ============================================================================

/// One evaluated point of a risk curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPoint<T> {
    /// Threshold the subset was cut at.
    pub threshold: T,

    /// Proportion of flagged observations among those with
    /// `value >= threshold`; 0 for an empty subset.
    pub proportion: T,
}

// ============================================================================
// Risk Curve
// ============================================================================

/// Sweep thresholds from the minimum to the maximum observed value in
/// increments of `step`, reporting at each threshold the proportion of
/// flagged observations among those at or above it.
///
/// `observations` pairs each measured value with a boolean flag. Fails with
/// [`StatError::EmptyInput`] for no observations and
/// [`StatError::InvalidStep`] for a non-positive step.
pub fn risk_curve<T: Float>(
    observations: &[(T, bool)],
    step: T,
) -> Result<Vec<ThresholdPoint<T>>, StatError> {
    if observations.is_empty() {
        return Err(StatError::EmptyInput);
    }
    Validator::validate_step(step)?;

    let mut min = observations[0].0;
    let mut max = observations[0].0;
    for &(v, _) in observations.iter() {
        if !v.is_finite() {
            return Err(StatError::InvalidNumericValue(format!(
                "observation value {}",
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let curve = stepped(min, max, step)
        .into_iter()
        .map(|threshold| {
            let mut total = 0usize;
            let mut flagged = 0usize;
            for &(v, flag) in observations {
                if v >= threshold {
                    total += 1;
                    if flag {
                        flagged += 1;
                    }
                }
            }

            let proportion = if total == 0 {
                T::zero()
            } else {
                T::from(flagged).unwrap_or_else(T::zero) / T::from(total).unwrap_or_else(T::one)
            };

            ThresholdPoint {
                threshold,
                proportion,
            }
        })
        .collect();

    Ok(curve)
}
