//! Sorting utilities for numeric samples.
//!
//! ## Purpose
//!
//! This module provides the ascending sort that quantile computation relies
//! on. Samples carry no identity beyond their value, so sorting only has to
//! be deterministic, not order-preserving for callers.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal values keep a deterministic relative order.
//! * **Robustness**: The comparator treats incomparable (NaN) pairs as equal rather than panicking;
//!   validation upstream rejects non-finite samples before they reach this point.
//! * **Efficiency**: Already-sorted inputs are detected and copied without re-sorting.
//!
//! ## Invariants
//!
//! * The returned sample is non-decreasing for finite inputs.
//! * The returned sample is a permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs.
//! * This module does not compute any statistic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return a copy of `sample` sorted in ascending order.
///
/// 1. Checks if the data is already sorted (fast path).
/// 2. Performs a stable sort with a `partial_cmp` comparator.
#[inline]
pub fn sort_sample<T: Float>(sample: &[T]) -> Vec<T> {
    // Fast path: already non-decreasing
    let is_sorted = sample.windows(2).all(|w| w[0] <= w[1]);
    if is_sorted {
        return sample.to_vec();
    }

    let mut sorted = sample.to_vec();
    // Stable sort for determinism on duplicate values
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Check whether a slice is sorted in ascending (non-decreasing) order.
#[inline]
pub fn is_ascending<T: Float>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
