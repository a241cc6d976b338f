//! Histogram binning.
//!
//! ## Purpose
//!
//! This module partitions a numeric sample into contiguous bins over a fixed
//! domain and counts membership, producing the frequency distributions behind
//! the histogram charts.
//!
//! ## Design notes
//!
//! * **Bin convention**: Bins are half-open `[x0, x1)`, except the last bin,
//!   which is closed on both ends so the domain maximum is counted.
//! * **Out-of-domain values**: Values outside `[min, max]` are ignored, not
//!   clamped into the edge bins.
//! * **Determinism**: The same sample, domain, and bin specification always
//!   yield identical bins.
//!
//! ## Invariants
//!
//! * Bins are contiguous, non-overlapping, and cover the domain exactly once.
//! * `x0 < x1` for every bin.
//! * The sum of counts equals the number of in-domain sample values.
//!
//! ## Non-goals
//!
//! * This module does not choose "nice" bin boundaries; callers pass either a
//!   count or explicit thresholds.
//! * This module does not normalize counts to densities or proportions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::StatError;

// ============================================================================
// Bin Types
// ============================================================================

/// One histogram bin: a half-open interval and its membership count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin<T> {
    /// Inclusive lower edge.
    pub x0: T,

    /// Upper edge; exclusive except for the last bin of a histogram.
    pub x1: T,

    /// Number of sample values falling in this bin.
    pub count: usize,
}

/// How to partition the domain into bins.
#[derive(Debug, Clone, PartialEq)]
pub enum BinSpec<T> {
    /// Split the domain into this many equal-width bins.
    Count(usize),

    /// Explicit interior bin boundaries, strictly ascending and strictly
    /// inside the domain. `n` thresholds produce `n + 1` bins.
    Thresholds(Vec<T>),
}

// ============================================================================
// Binning
// ============================================================================

/// Build a histogram of `sample` over the domain `[min, max]`.
///
/// Fails with [`StatError::InvalidDomain`] when `min >= max`, with
/// [`StatError::InvalidBinCount`] for a zero bin count, and with
/// [`StatError::InvalidGrid`] for unordered or out-of-domain thresholds.
/// The sample itself may be empty; all counts are then zero.
pub fn build_histogram<T: Float>(
    sample: &[T],
    min: T,
    max: T,
    spec: &BinSpec<T>,
) -> Result<Vec<HistogramBin<T>>, StatError> {
    Validator::validate_domain(min, max)?;
    Validator::validate_sample_values(sample)?;

    let edges = bin_edges(min, max, spec)?;

    let mut bins: Vec<HistogramBin<T>> = edges
        .windows(2)
        .map(|w| HistogramBin {
            x0: w[0],
            x1: w[1],
            count: 0,
        })
        .collect();

    let last = bins.len() - 1;
    for &v in sample {
        if v < min || v > max {
            continue;
        }
        // Linear scan is fine at chart scale; bins are few
        for (i, bin) in bins.iter_mut().enumerate() {
            let in_bin = if i == last {
                v >= bin.x0 && v <= bin.x1
            } else {
                v >= bin.x0 && v < bin.x1
            };
            if in_bin {
                bin.count += 1;
                break;
            }
        }
    }

    Ok(bins)
}

/// Resolve a [`BinSpec`] into the full ascending edge sequence
/// `[min, t_1, ..., t_n, max]`.
fn bin_edges<T: Float>(min: T, max: T, spec: &BinSpec<T>) -> Result<Vec<T>, StatError> {
    match spec {
        BinSpec::Count(bins) => {
            if *bins == 0 {
                return Err(StatError::InvalidBinCount(0));
            }

            let n = T::from(*bins).unwrap_or_else(T::one);
            let width = (max - min) / n;

            let mut edges = Vec::with_capacity(*bins + 1);
            for i in 0..*bins {
                edges.push(min + width * T::from(i).unwrap_or_else(T::zero));
            }
            // Exact upper edge avoids drift from repeated addition
            edges.push(max);
            Ok(edges)
        }

        BinSpec::Thresholds(thresholds) => {
            Validator::validate_thresholds(thresholds, min, max)?;

            let mut edges = Vec::with_capacity(thresholds.len() + 2);
            edges.push(min);
            edges.extend_from_slice(thresholds);
            edges.push(max);
            Ok(edges)
        }
    }
}
