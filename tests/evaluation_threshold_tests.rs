#![cfg(feature = "dev")]
//! Tests for threshold sweeps over flagged observations.
//!
//! These tests verify the risk curve behind the threshold slider chart:
//! - Proportions of flagged observations at or above each threshold
//! - Sweep bounds and step behavior
//! - Empty-subset and error handling
//!
//! ## Test Organization
//!
//! 1. **Known Curves** - Hand-computed proportions
//! 2. **Sweep Bounds** - Minimum-to-maximum coverage
//! 3. **Edge Cases** - All-flagged, none-flagged inputs
//! 4. **Error Conditions** - Empty input, bad steps

use approx::assert_relative_eq;

use denstat::internals::evaluation::threshold::risk_curve;
use denstat::internals::primitives::errors::StatError;

// ============================================================================
// Known Curve Tests
// ============================================================================

/// Test hand-computed proportions on a small dataset.
#[test]
fn test_known_proportions() {
    // Values 1..4; flags on the two highest
    let obs = vec![(1.0f64, false), (2.0, false), (3.0, true), (4.0, true)];
    let curve = risk_curve(&obs, 1.0).unwrap();

    assert_eq!(curve.len(), 4);

    // threshold 1: 2 of 4 flagged
    assert_relative_eq!(curve[0].threshold, 1.0, epsilon = 1e-12);
    assert_relative_eq!(curve[0].proportion, 0.5, epsilon = 1e-12);

    // threshold 2: 2 of 3
    assert_relative_eq!(curve[1].proportion, 2.0 / 3.0, epsilon = 1e-12);

    // threshold 3: 2 of 2
    assert_relative_eq!(curve[2].proportion, 1.0, epsilon = 1e-12);

    // threshold 4: 1 of 1
    assert_relative_eq!(curve[3].proportion, 1.0, epsilon = 1e-12);
}

/// Test that proportions always stay inside the unit interval.
#[test]
fn test_proportions_in_unit_interval() {
    let obs: Vec<(f64, bool)> = (0..50)
        .map(|i| (f64::from(i) * 0.2, i % 3 == 0))
        .collect();
    let curve = risk_curve(&obs, 0.5).unwrap();

    for point in &curve {
        assert!((0.0..=1.0).contains(&point.proportion));
    }
}

// ============================================================================
// Sweep Bound Tests
// ============================================================================

/// Test that the sweep runs from the minimum to the maximum value.
#[test]
fn test_sweep_covers_range() {
    let obs = vec![(4.0f64, false), (7.0, true), (5.5, true)];
    let curve = risk_curve(&obs, 0.1).unwrap();

    assert_relative_eq!(curve[0].threshold, 4.0, epsilon = 1e-12);
    assert_relative_eq!(curve[curve.len() - 1].threshold, 7.0, epsilon = 1e-9);

    for w in curve.windows(2) {
        assert!(w[0].threshold < w[1].threshold);
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test all-flagged and none-flagged observation sets.
#[test]
fn test_uniform_flags() {
    let all = vec![(1.0f64, true), (2.0, true), (3.0, true)];
    for point in risk_curve(&all, 1.0).unwrap() {
        assert_relative_eq!(point.proportion, 1.0, epsilon = 1e-12);
    }

    let none = vec![(1.0f64, false), (2.0, false), (3.0, false)];
    for point in risk_curve(&none, 1.0).unwrap() {
        assert_relative_eq!(point.proportion, 0.0, epsilon = 1e-12);
    }
}

/// Test that a single observation yields a single-point curve.
#[test]
fn test_single_observation() {
    let curve = risk_curve(&[(5.0f64, true)], 0.1).unwrap();

    assert_eq!(curve.len(), 1);
    assert_relative_eq!(curve[0].threshold, 5.0, epsilon = 1e-12);
    assert_relative_eq!(curve[0].proportion, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Error Condition Tests
// ============================================================================

/// Test empty input and invalid steps.
#[test]
fn test_invalid_inputs() {
    let empty: Vec<(f64, bool)> = Vec::new();
    assert_eq!(risk_curve(&empty, 0.1), Err(StatError::EmptyInput));

    let obs = vec![(1.0f64, true)];
    assert_eq!(risk_curve(&obs, 0.0), Err(StatError::InvalidStep(0.0)));
    assert_eq!(risk_curve(&obs, -1.0), Err(StatError::InvalidStep(-1.0)));

    let bad = vec![(f64::NAN, true)];
    assert!(matches!(
        risk_curve(&bad, 0.1),
        Err(StatError::InvalidNumericValue(_))
    ));
}
