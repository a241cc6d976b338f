#![cfg(feature = "dev")]
//! Tests for histogram binning.
//!
//! These tests verify the frequency distributions behind histogram charts:
//! - Equal-width and threshold-based bin construction
//! - The half-open bin convention with a closed final bin
//! - Domain validation and out-of-domain handling
//!
//! ## Test Organization
//!
//! 1. **Bin Construction** - Edges for counts and explicit thresholds
//! 2. **Counting** - Membership, boundaries, the closed last bin
//! 3. **Error Conditions** - Degenerate domains, bad thresholds
//! 4. **Determinism** - Identical inputs yield identical bins

use approx::assert_relative_eq;

use denstat::internals::algorithms::histogram::{build_histogram, BinSpec, HistogramBin};
use denstat::internals::primitives::errors::StatError;

// ============================================================================
// Bin Construction Tests
// ============================================================================

/// Test that equal-width bins partition the domain exactly.
#[test]
fn test_equal_width_partition() {
    let sample: Vec<f64> = Vec::new();
    let bins = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(5)).unwrap();

    assert_eq!(bins.len(), 5);
    assert_relative_eq!(bins[0].x0, 0.0, epsilon = 1e-12);
    assert_relative_eq!(bins[4].x1, 10.0, epsilon = 1e-12);

    // Contiguous and non-overlapping
    for w in bins.windows(2) {
        assert_relative_eq!(w[0].x1, w[1].x0, epsilon = 1e-12);
    }
    for bin in &bins {
        assert!(bin.x0 < bin.x1);
        assert_eq!(bin.count, 0);
    }
}

/// Test explicit interior thresholds: n thresholds produce n + 1 bins.
#[test]
fn test_threshold_bins() {
    let sample = vec![0.5f64, 2.5, 7.5];
    let spec = BinSpec::Thresholds(vec![2.0, 5.0]);
    let bins = build_histogram(&sample, 0.0, 10.0, &spec).unwrap();

    assert_eq!(bins.len(), 3);
    assert_relative_eq!(bins[0].x0, 0.0, epsilon = 1e-12);
    assert_relative_eq!(bins[0].x1, 2.0, epsilon = 1e-12);
    assert_relative_eq!(bins[1].x1, 5.0, epsilon = 1e-12);
    assert_relative_eq!(bins[2].x1, 10.0, epsilon = 1e-12);

    assert_eq!(bins[0].count, 1);
    assert_eq!(bins[1].count, 1);
    assert_eq!(bins[2].count, 1);
}

// ============================================================================
// Counting Tests
// ============================================================================

/// Test that counts sum to the full sample size and the closed last bin
/// captures the domain maximum.
#[test]
fn test_counts_sum_and_closed_last_bin() {
    let sample = vec![0.0f64, 1.0, 5.0, 9.9, 10.0];
    let bins = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(5)).unwrap();

    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, 5);

    // 0 and 1 in [0,2); 5 in [4,6); 9.9 and 10 in [8,10]
    assert_eq!(bins[0].count, 2);
    assert_eq!(bins[2].count, 1);
    assert_eq!(bins[4].count, 2);
}

/// Test that a value exactly on an interior boundary lands in the upper bin.
#[test]
fn test_interior_boundary_belongs_upward() {
    let sample = vec![2.0f64];
    let bins = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(5)).unwrap();

    assert_eq!(bins[0].count, 0);
    assert_eq!(bins[1].count, 1); // [2, 4)
}

/// Test that out-of-domain values are ignored, not clamped.
#[test]
fn test_out_of_domain_ignored() {
    let sample = vec![-5.0f64, 5.0, 15.0];
    let bins = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(2)).unwrap();

    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, 1);
}

// ============================================================================
// Error Condition Tests
// ============================================================================

/// Test that a degenerate domain fails with InvalidDomain.
#[test]
fn test_invalid_domain() {
    let sample = vec![1.0f64];

    assert_eq!(
        build_histogram(&sample, 10.0, 10.0, &BinSpec::Count(5)),
        Err(StatError::InvalidDomain {
            min: 10.0,
            max: 10.0
        })
    );
    assert!(matches!(
        build_histogram(&sample, 10.0, 0.0, &BinSpec::Count(5)),
        Err(StatError::InvalidDomain { .. })
    ));
}

/// Test bad bin specifications: zero bins, unordered or out-of-domain thresholds.
#[test]
fn test_invalid_specs() {
    let sample = vec![1.0f64];

    assert_eq!(
        build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(0)),
        Err(StatError::InvalidBinCount(0))
    );

    let unordered = BinSpec::Thresholds(vec![5.0, 2.0]);
    assert!(matches!(
        build_histogram(&sample, 0.0, 10.0, &unordered),
        Err(StatError::InvalidGrid(_))
    ));

    let outside = BinSpec::Thresholds(vec![12.0]);
    assert!(matches!(
        build_histogram(&sample, 0.0, 10.0, &outside),
        Err(StatError::InvalidGrid(_))
    ));
}

/// Test that a NaN sample value is rejected up front.
#[test]
fn test_nan_sample_rejected() {
    let sample = vec![1.0f64, f64::NAN];
    assert!(matches!(
        build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(2)),
        Err(StatError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Test that identical inputs always yield identical bins.
#[test]
fn test_deterministic() {
    let sample = vec![0.3f64, 4.2, 4.2, 7.9, 9.99];

    let a = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(10)).unwrap();
    let b = build_histogram(&sample, 0.0, 10.0, &BinSpec::Count(10)).unwrap();

    let pairs: Vec<(&HistogramBin<f64>, &HistogramBin<f64>)> = a.iter().zip(&b).collect();
    for (x, y) in pairs {
        assert_eq!(x, y);
    }
}
