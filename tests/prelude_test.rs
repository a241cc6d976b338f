#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the statistics core. The prelude should provide a
//! one-stop import for a chart panel's computations.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports
//! 3. **Error Handling** - Errors surface through the prelude types

use denstat::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Exercises every component the way a chart panel would, using only
/// prelude names.
#[test]
fn test_prelude_imports() {
    let sample = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    // Box plot
    let summary: FiveNumberSummary<f64> = FiveNumberSummary::from_sample(&sample).unwrap();
    assert_eq!(summary.median, 5.0);

    // Descriptive panel
    let stats: DescriptiveStats<f64> = DescriptiveStats::from_sample(&sample).unwrap();
    assert_eq!(stats.mean, 5.0);
    assert!(stats.std_dev.is_some());

    // Violin plot
    let curve: DensityCurve<f64> = Kde::new()
        .bandwidth(0.8)
        .kernel(Kernel::Epanechnikov)
        .grid_points(40)
        .build()
        .unwrap()
        .estimate(&sample)
        .unwrap();
    assert_eq!(curve.len(), 40);
    assert!(curve.max_density() > 0.0);

    // Histogram
    let bins: Vec<HistogramBin<f64>> = Histogram::new()
        .domain(0.0, 10.0)
        .bins(5)
        .build()
        .unwrap()
        .bin(&sample)
        .unwrap();
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 9);

    // Risk clustering
    let points: Vec<Point2D<f64>> = sample
        .iter()
        .map(|&v| Point2D::new(v, v * 10.0))
        .collect();
    let clustering: Clustering<f64> = KMeans::new()
        .clusters(3)
        .max_iterations(25)
        .seed(42)
        .build()
        .unwrap()
        .fit(&points)
        .unwrap();
    assert_eq!(clustering.centroids.len(), 3);
    assert!(clustering.assignment.iter().all(|&c| c < 3));

    // Threshold slider
    let obs: Vec<(f64, bool)> = sample.iter().map(|&v| (v, v > 6.0)).collect();
    let risk: Vec<ThresholdPoint<f64>> = risk_curve(&obs, 1.0).unwrap();
    assert!(!risk.is_empty());

    // Group cut points
    let cuts = group_thresholds(&sample, 3).unwrap();
    assert_eq!(cuts.len(), 2);

    // Direct quantile access on sorted data
    assert_eq!(quantile(&sample, 0.5), Some(5.0));
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a violin-plot workflow: density curves per group over one grid.
#[test]
fn test_violin_workflow() {
    let low = vec![1.0f64, 1.2, 1.5, 1.9, 2.0];
    let high = vec![6.8f64, 7.0, 7.1, 7.4, 8.0];

    // Shared explicit grid keeps the two half-violins comparable
    let grid: Vec<f64> = (0..=100).map(|i| f64::from(i) * 0.1).collect();
    let estimator = Kde::new().bandwidth(0.5).grid(grid).build().unwrap();

    let low_curve = estimator.estimate(&low).unwrap();
    let high_curve = estimator.estimate(&high).unwrap();

    assert_eq!(low_curve.len(), high_curve.len());
    assert!(low_curve.max_density() > 0.0);
    assert!(high_curve.max_density() > 0.0);
}

/// Test that a built model is reusable across samples.
#[test]
fn test_model_reuse() {
    let binner = Histogram::new().domain(0.0, 1.0).bins(4).build().unwrap();

    let a = binner.bin(&[0.1f64, 0.2]).unwrap();
    let b = binner.bin(&[0.9f64]).unwrap();

    assert_eq!(a.iter().map(|x| x.count).sum::<usize>(), 2);
    assert_eq!(b.iter().map(|x| x.count).sum::<usize>(), 1);
}

/// Test explicit initial centroids through the builder seam.
#[test]
fn test_explicit_initialization_seam() {
    let points = vec![
        Point2D::new(0.0f64, 0.0),
        Point2D::new(0.1, 0.1),
        Point2D::new(9.0, 9.0),
        Point2D::new(9.1, 9.1),
    ];

    let model = KMeans::new()
        .clusters(2)
        .initial_centroids(vec![Point2D::new(0.0, 0.0), Point2D::new(9.0, 9.0)])
        .build()
        .unwrap();

    let first = model.fit(&points).unwrap();
    let second = model.fit(&points).unwrap();
    assert_eq!(first, second);
    assert!(first.converged);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test that errors surface through the prelude's StatError.
#[test]
fn test_error_surface() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(
        FiveNumberSummary::from_sample(&empty),
        Err(StatError::EmptyInput)
    );

    // Bandwidth is mandatory
    assert!(matches!(
        Kde::<f64>::new().build(),
        Err(StatError::InvalidInput(_))
    ));
    assert!(matches!(
        Kde::new().bandwidth(-0.5f64).build(),
        Err(StatError::InvalidBandwidth(_))
    ));

    // Degenerate histogram domain
    assert!(matches!(
        Histogram::new().domain(3.0f64, 3.0).build(),
        Err(StatError::InvalidDomain { .. })
    ));

    // More clusters than points
    let two = vec![Point2D::new(0.0f64, 0.0), Point2D::new(1.0, 1.0)];
    let model = KMeans::new().clusters(5).build().unwrap();
    assert_eq!(
        model.fit(&two),
        Err(StatError::InvalidClusterCount { k: 5, points: 2 })
    );
}
