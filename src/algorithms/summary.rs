//! Quantiles and distribution summaries.
//!
//! ## Purpose
//!
//! This module computes the order statistics behind every box plot: linear-
//! interpolation quantiles, the five-number summary with Tukey whiskers, and
//! basic descriptive statistics (mean, sample standard deviation).
//!
//! ## Design notes
//!
//! * **Quantile rule**: For fraction `p` over `n` sorted values, `h = p*(n-1)`
//!   is split into an index and a fraction and the two neighbors are linearly
//!   interpolated (the R-7 rule, matching `d3.quantile`).
//! * **Whiskers**: Q1/Q3 ± 1.5×IQR, clipped to the sample's actual min/max.
//! * **Insufficient data is explicit**: The sample standard deviation is
//!   `None` below 2 observations rather than a silent zero, so callers can
//!   render an "insufficient data" state instead of a zero-width band.
//!
//! ## Invariants
//!
//! * `lower_whisker <= q1 <= median <= q3 <= upper_whisker` for every
//!   non-empty sample.
//! * A size-1 sample collapses all five summary values to that single value.
//!
//! ## Non-goals
//!
//! * This module does not filter NaN values; samples are validated upstream.
//! * This module does not decide outlier rendering; it only reports bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::StatError;
use crate::primitives::sorting::sort_sample;

// ============================================================================
// Quantile Computation
// ============================================================================

/// Compute the quantile at fraction `p` of an ascending-sorted sample using
/// linear interpolation between closest ranks.
///
/// Returns `None` for an empty sample. Fractions outside `[0, 1]` are
/// clamped to the sample's extremes.
pub fn quantile<T: Float>(sorted: &[T], p: T) -> Option<T> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = p * T::from(n - 1).unwrap_or_else(T::one);
    if h <= T::zero() {
        return Some(sorted[0]);
    }

    let last = n - 1;
    let lo = h.floor().to_usize().unwrap_or(last).min(last);
    let frac = h - T::from(lo).unwrap_or_else(T::zero);

    // Clamp the upper neighbor at the last index
    let hi = if lo + 1 <= last { lo + 1 } else { last };

    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

// ============================================================================
// Five-Number Summary
// ============================================================================

/// Box-plot statistics for a numeric sample.
///
/// Whiskers follow the Tukey convention: 1.5×IQR beyond the quartiles,
/// clipped to the observed minimum and maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary<T> {
    /// First quartile (25th percentile).
    pub q1: T,

    /// Median (50th percentile).
    pub median: T,

    /// Third quartile (75th percentile).
    pub q3: T,

    /// Lower whisker: `max(min(sample), q1 - 1.5*iqr)`.
    pub lower_whisker: T,

    /// Upper whisker: `min(max(sample), q3 + 1.5*iqr)`.
    pub upper_whisker: T,
}

impl<T: Float> FiveNumberSummary<T> {
    /// Compute the five-number summary of a non-empty sample.
    ///
    /// The sample does not need to be sorted. Fails with
    /// [`StatError::EmptyInput`] on an empty sample and
    /// [`StatError::InvalidNumericValue`] if any value is NaN or infinite.
    pub fn from_sample(sample: &[T]) -> Result<Self, StatError> {
        Validator::validate_sample(sample)?;

        let sorted = sort_sample(sample);
        Self::from_sorted(&sorted)
    }

    /// Compute the five-number summary of an ascending-sorted sample.
    ///
    /// Callers that already hold sorted data (e.g., after deriving group
    /// thresholds) can skip the re-sort.
    pub fn from_sorted(sorted: &[T]) -> Result<Self, StatError> {
        if sorted.is_empty() {
            return Err(StatError::EmptyInput);
        }

        let half = T::from(0.5).unwrap_or_else(T::one);
        let quarter = T::from(0.25).unwrap_or_else(T::zero);
        let three_quarters = T::from(0.75).unwrap_or_else(T::one);

        // Non-empty input: the quantiles are always present
        let q1 = quantile(sorted, quarter).unwrap_or_else(T::zero);
        let median = quantile(sorted, half).unwrap_or_else(T::zero);
        let q3 = quantile(sorted, three_quarters).unwrap_or_else(T::zero);

        let iqr = q3 - q1;
        let reach = T::from(1.5).unwrap_or_else(T::one) * iqr;

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        Ok(Self {
            q1,
            median,
            q3,
            lower_whisker: min.max(q1 - reach),
            upper_whisker: max.min(q3 + reach),
        })
    }

    /// Interquartile range: `q3 - q1`.
    #[inline]
    pub fn iqr(&self) -> T {
        self.q3 - self.q1
    }
}

// ============================================================================
// Descriptive Statistics
// ============================================================================

/// Mean and sample standard deviation of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats<T> {
    /// Number of observations.
    pub count: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Sample standard deviation (n-1 denominator).
    ///
    /// `None` when the sample has fewer than 2 observations; a spread
    /// cannot be estimated from a single value.
    pub std_dev: Option<T>,
}

impl<T: Float> DescriptiveStats<T> {
    /// Compute descriptive statistics for a non-empty sample.
    pub fn from_sample(sample: &[T]) -> Result<Self, StatError> {
        Validator::validate_sample(sample)?;

        let count = sample.len();
        let n = T::from(count).unwrap_or_else(T::one);

        let mut sum = T::zero();
        for &v in sample {
            sum = sum + v;
        }
        let mean = sum / n;

        let std_dev = if count < 2 {
            None
        } else {
            let mut ss = T::zero();
            for &v in sample {
                let d = v - mean;
                ss = ss + d * d;
            }
            let denom = T::from(count - 1).unwrap_or_else(T::one);
            Some((ss / denom).sqrt())
        };

        Ok(Self {
            count,
            mean,
            std_dev,
        })
    }
}

// ============================================================================
// Group Thresholds
// ============================================================================

/// Compute equal-probability cut points splitting a sample into `groups`
/// contiguous groups (e.g., 3 groups → the two tercile thresholds).
///
/// Returns `groups - 1` ascending thresholds. Fails on an empty sample or
/// a group count below 2.
pub fn group_thresholds<T: Float>(sample: &[T], groups: usize) -> Result<Vec<T>, StatError> {
    Validator::validate_sample(sample)?;
    if groups < 2 {
        return Err(StatError::InvalidInput(format!(
            "group count must be at least 2, got {groups}"
        )));
    }

    let sorted = sort_sample(sample);
    let g = T::from(groups).unwrap_or_else(T::one);

    let mut cuts = Vec::with_capacity(groups - 1);
    for i in 1..groups {
        let p = T::from(i).unwrap_or_else(T::zero) / g;
        // Non-empty input: quantile is always present
        cuts.push(quantile(&sorted, p).unwrap_or_else(T::zero));
    }

    Ok(cuts)
}
