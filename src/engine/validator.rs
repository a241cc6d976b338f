//! Input validation for samples and computation parameters.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation every public entry point
//! runs before computing: sample contents, bandwidths, grids, domains, and
//! clustering parameters. All failures are local precondition violations
//! detected before any computation begins.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//! * **No silent NaN**: Non-finite values are rejected here so they can
//!   never reach a result and leak into rendering.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like bandwidth > 0 and k <= n.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Domain Checks**: Degenerate ranges and unordered grids are rejected.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform any statistic computation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::kmeans::Point2D;
use crate::primitives::errors::StatError;
use crate::primitives::sorting::is_ascending;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for samples and computation parameters.
///
/// Provides static methods for validating inputs across the statistics
/// core. All methods return `Result<(), StatError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a sample that must be non-empty and all-finite.
    pub fn validate_sample<T: Float>(sample: &[T]) -> Result<(), StatError> {
        // Check 1: Non-empty
        if sample.is_empty() {
            return Err(StatError::EmptyInput);
        }

        // Check 2: All values finite
        Self::validate_sample_values(sample)
    }

    /// Validate that every value of a (possibly empty) sample is finite.
    pub fn validate_sample_values<T: Float>(sample: &[T]) -> Result<(), StatError> {
        for (i, &v) in sample.iter().enumerate() {
            if !v.is_finite() {
                return Err(StatError::InvalidNumericValue(format!(
                    "sample[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a non-empty set of 2D points with finite coordinates.
    pub fn validate_points<T: Float>(points: &[Point2D<T>]) -> Result<(), StatError> {
        // Check 1: Non-empty
        if points.is_empty() {
            return Err(StatError::EmptyInput);
        }

        // Check 2: Finite coordinates
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(StatError::InvalidNumericValue(format!(
                    "points[{}]=({}, {})",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN),
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a kernel bandwidth: positive and finite.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), StatError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(StatError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an evaluation grid: non-empty, finite, sorted ascending.
    pub fn validate_grid<T: Float>(grid: &[T]) -> Result<(), StatError> {
        // Check 1: Non-empty
        if grid.is_empty() {
            return Err(StatError::InvalidGrid("grid is empty".into()));
        }

        // Check 2: Finite values
        for (i, &x) in grid.iter().enumerate() {
            if !x.is_finite() {
                return Err(StatError::InvalidGrid(format!(
                    "grid[{}]={} is not finite",
                    i,
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 3: Ascending order
        if !is_ascending(grid) {
            return Err(StatError::InvalidGrid(
                "grid is not sorted ascending".into(),
            ));
        }

        Ok(())
    }

    /// Validate a binning domain: finite edges with `min < max`.
    pub fn validate_domain<T: Float>(min: T, max: T) -> Result<(), StatError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(StatError::InvalidDomain {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate explicit bin thresholds: strictly ascending and strictly
    /// inside the domain.
    pub fn validate_thresholds<T: Float>(
        thresholds: &[T],
        min: T,
        max: T,
    ) -> Result<(), StatError> {
        let mut prev = min;
        for (i, &t) in thresholds.iter().enumerate() {
            if !t.is_finite() {
                return Err(StatError::InvalidGrid(format!(
                    "threshold[{}]={} is not finite",
                    i,
                    t.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if t <= prev || t >= max {
                return Err(StatError::InvalidGrid(format!(
                    "threshold[{}]={} must be strictly inside the domain and strictly ascending",
                    i,
                    t.to_f64().unwrap_or(f64::NAN)
                )));
            }
            prev = t;
        }
        Ok(())
    }

    /// Validate a cluster count against the number of available points.
    pub fn validate_cluster_count(k: usize, points: usize) -> Result<(), StatError> {
        if k == 0 || k > points {
            return Err(StatError::InvalidClusterCount { k, points });
        }
        Ok(())
    }

    /// Validate a k-means iteration budget.
    pub fn validate_iterations(max_iterations: usize) -> Result<(), StatError> {
        if max_iterations == 0 {
            return Err(StatError::InvalidIterations(0));
        }
        Ok(())
    }

    /// Validate a threshold sweep step: positive and finite.
    pub fn validate_step<T: Float>(step: T) -> Result<(), StatError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(StatError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }
}
