//! High-level API for the statistics core.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: fluent
//! builders for the configurable computations (density estimation,
//! clustering, binning) and re-exports of the directly constructible
//! summaries. Each chart panel configures one builder, builds a model, and
//! runs it against its sample.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters
//!   that have one; the kernel bandwidth deliberately has no default.
//! * **Validated**: Parameters are checked when `build()` is called; the
//!   returned model cannot hold an invalid configuration.
//! * **Stateless models**: A built model borrows nothing and retains no
//!   reference to any sample it is run against, so models are freely
//!   reusable across panels and safe to use from parallel chart
//!   computations over disjoint data.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder → `build()` → model → run method.
//! * **Explicit configuration**: No global chart state; everything a
//!   computation needs is a parameter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::density::estimate_density;
use crate::algorithms::histogram::{build_histogram, BinSpec};
use crate::algorithms::kmeans::cluster;
use crate::engine::validator::Validator;
use crate::math::grid::covering;

// Publicly re-exported types
pub use crate::algorithms::density::{DensityCurve, DensityPoint};
pub use crate::algorithms::histogram::HistogramBin;
pub use crate::algorithms::kmeans::{Clustering, Initialization, Point2D};
pub use crate::algorithms::summary::{
    group_thresholds, quantile, DescriptiveStats, FiveNumberSummary,
};
pub use crate::evaluation::threshold::{risk_curve, ThresholdPoint};
pub use crate::math::kernel::Kernel;
pub use crate::primitives::errors::StatError;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of evaluation grid points for a density curve.
const DEFAULT_GRID_POINTS: usize = 60;

/// Default cluster count for the risk scatter plot (low / mid / high).
const DEFAULT_CLUSTERS: usize = 3;

/// Default k-means iteration budget.
const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default histogram bin count.
const DEFAULT_BINS: usize = 30;

// ============================================================================
// KDE Builder
// ============================================================================

/// How the evaluation grid of a density estimate is obtained.
#[derive(Debug, Clone, PartialEq)]
enum GridSpec<T> {
    /// Evenly spaced grid over the sample range, widened by a margin
    /// fraction of the span on each side.
    Derived { points: usize, margin_frac: T },

    /// Caller-supplied ascending grid.
    Explicit(Vec<T>),
}

/// Fluent builder for kernel density estimation.
///
/// The bandwidth is required; there is no automatic bandwidth selection.
///
/// ```
/// use denstat::prelude::*;
///
/// let sample = vec![4.9_f64, 5.4, 5.6, 6.1, 6.4, 7.0, 7.9];
/// let curve = Kde::new().bandwidth(0.4).grid_points(60).build()?.estimate(&sample)?;
/// assert!(curve.max_density() > 0.0);
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Kde<T> {
    /// Kernel bandwidth; must be set before `build()`.
    pub bandwidth: Option<T>,

    /// Smoothing kernel (default: Epanechnikov).
    pub kernel: Kernel,

    /// Evaluation grid specification.
    grid: GridSpec<T>,
}

impl<T: Float> Default for Kde<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Kde<T> {
    /// Create a builder with the default kernel and a derived grid.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            kernel: Kernel::default(),
            grid: GridSpec::Derived {
                points: DEFAULT_GRID_POINTS,
                margin_frac: T::zero(),
            },
        }
    }

    /// Set the kernel bandwidth (required, must be positive).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the smoothing kernel.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Derive the grid from the sample range with this many points.
    pub fn grid_points(mut self, points: usize) -> Self {
        let margin_frac = match self.grid {
            GridSpec::Derived { margin_frac, .. } => margin_frac,
            GridSpec::Explicit(_) => T::zero(),
        };
        self.grid = GridSpec::Derived {
            points,
            margin_frac,
        };
        self
    }

    /// Widen a derived grid by this fraction of the sample span per side.
    pub fn grid_margin(mut self, margin_frac: T) -> Self {
        let points = match self.grid {
            GridSpec::Derived { points, .. } => points,
            GridSpec::Explicit(_) => DEFAULT_GRID_POINTS,
        };
        self.grid = GridSpec::Derived {
            points,
            margin_frac,
        };
        self
    }

    /// Evaluate on an explicit ascending grid instead of a derived one.
    pub fn grid(mut self, grid: Vec<T>) -> Self {
        self.grid = GridSpec::Explicit(grid);
        self
    }

    /// Validate the configuration and build a runnable estimator.
    pub fn build(self) -> Result<DensityEstimator<T>, StatError> {
        let bandwidth = self.bandwidth.ok_or_else(|| {
            StatError::InvalidInput(String::from(
                "bandwidth is required; no automatic bandwidth selection is performed",
            ))
        })?;
        Validator::validate_bandwidth(bandwidth)?;

        if let GridSpec::Explicit(ref grid) = self.grid {
            Validator::validate_grid(grid)?;
        }

        Ok(DensityEstimator {
            bandwidth,
            kernel: self.kernel,
            grid: self.grid,
        })
    }
}

/// A validated, reusable density estimator.
#[derive(Debug, Clone)]
pub struct DensityEstimator<T> {
    /// Kernel bandwidth.
    pub bandwidth: T,

    /// Smoothing kernel.
    pub kernel: Kernel,

    /// Evaluation grid specification.
    grid: GridSpec<T>,
}

impl<T: Float> DensityEstimator<T> {
    /// Estimate the density curve of `sample`.
    ///
    /// An empty sample yields an all-zero curve over the configured
    /// explicit grid, or an empty curve when the grid would be derived
    /// from the (absent) sample range.
    pub fn estimate(&self, sample: &[T]) -> Result<DensityCurve<T>, StatError> {
        Validator::validate_sample_values(sample)?;

        let curve = match &self.grid {
            GridSpec::Explicit(grid) => {
                estimate_density(sample, grid, self.kernel, self.bandwidth)
            }
            GridSpec::Derived {
                points,
                margin_frac,
            } => {
                let grid = covering(sample, *points, *margin_frac);
                estimate_density(sample, &grid, self.kernel, self.bandwidth)
            }
        };

        Ok(curve)
    }
}

// ============================================================================
// K-Means Builder
// ============================================================================

/// Fluent builder for 2D k-means clustering.
///
/// ```
/// use denstat::prelude::*;
///
/// let points = vec![
///     Point2D::new(0.0_f64, 0.0),
///     Point2D::new(0.2, 0.1),
///     Point2D::new(5.0, 5.0),
///     Point2D::new(5.1, 4.9),
/// ];
/// let clustering = KMeans::new().clusters(2).seed(7).build()?.fit(&points)?;
/// assert_eq!(clustering.assignment[0], clustering.assignment[1]);
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct KMeans<T> {
    /// Number of clusters (default: 3).
    pub clusters: usize,

    /// Lloyd iteration budget (default: 50).
    pub max_iterations: usize,

    /// Centroid initialization policy (default: first k points).
    pub initialization: Initialization<T>,
}

impl<T: Float> Default for KMeans<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KMeans<T> {
    /// Create a builder with default cluster count and iteration budget.
    pub fn new() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initialization: Initialization::default(),
        }
    }

    /// Set the number of clusters.
    pub fn clusters(mut self, k: usize) -> Self {
        self.clusters = k;
        self
    }

    /// Set the Lloyd iteration budget.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Draw the initial centroids uniformly without replacement,
    /// reproducibly for this seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.initialization = Initialization::Seeded(seed);
        self
    }

    /// Start from caller-provided centroids (deterministic test seam).
    pub fn initial_centroids(mut self, centroids: Vec<Point2D<T>>) -> Self {
        self.initialization = Initialization::Explicit(centroids);
        self
    }

    /// Validate the configuration and build a runnable model.
    ///
    /// The cluster count is checked against the point count at `fit()`
    /// time, since the sample is not known yet.
    pub fn build(self) -> Result<KMeansModel<T>, StatError> {
        Validator::validate_iterations(self.max_iterations)?;

        if let Initialization::Explicit(ref centroids) = self.initialization {
            if centroids.len() != self.clusters {
                return Err(StatError::InvalidInput(format!(
                    "expected {} initial centroids, got {}",
                    self.clusters,
                    centroids.len()
                )));
            }
        }

        Ok(KMeansModel {
            clusters: self.clusters,
            max_iterations: self.max_iterations,
            initialization: self.initialization,
        })
    }
}

/// A validated, reusable k-means model.
#[derive(Debug, Clone)]
pub struct KMeansModel<T> {
    /// Number of clusters.
    pub clusters: usize,

    /// Lloyd iteration budget.
    pub max_iterations: usize,

    /// Centroid initialization policy.
    pub initialization: Initialization<T>,
}

impl<T: Float> KMeansModel<T> {
    /// Cluster `points`, returning centroids, the per-point assignment,
    /// and convergence information.
    pub fn fit(&self, points: &[Point2D<T>]) -> Result<Clustering<T>, StatError> {
        cluster(points, self.clusters, self.max_iterations, &self.initialization)
    }
}

// ============================================================================
// Histogram Builder
// ============================================================================

/// Fluent builder for histogram binning.
///
/// ```
/// use denstat::prelude::*;
///
/// let sample = vec![0.0_f64, 1.0, 5.0, 9.9, 10.0];
/// let bins = Histogram::new().domain(0.0, 10.0).bins(5).build()?.bin(&sample)?;
/// let total: usize = bins.iter().map(|b| b.count).sum();
/// assert_eq!(total, 5);
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Histogram<T> {
    /// Explicit domain; derived from the sample range when unset.
    pub domain: Option<(T, T)>,

    /// Bin specification (default: 30 equal-width bins).
    spec: BinSpec<T>,
}

impl<T: Float> Default for Histogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Histogram<T> {
    /// Create a builder with the default equal-width bin count.
    pub fn new() -> Self {
        Self {
            domain: None,
            spec: BinSpec::Count(DEFAULT_BINS),
        }
    }

    /// Set the binning domain explicitly.
    pub fn domain(mut self, min: T, max: T) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Split the domain into this many equal-width bins.
    pub fn bins(mut self, bins: usize) -> Self {
        self.spec = BinSpec::Count(bins);
        self
    }

    /// Use explicit interior bin thresholds instead of an equal-width split.
    pub fn thresholds(mut self, thresholds: Vec<T>) -> Self {
        self.spec = BinSpec::Thresholds(thresholds);
        self
    }

    /// Validate the configuration and build a runnable binner.
    pub fn build(self) -> Result<HistogramModel<T>, StatError> {
        if let Some((min, max)) = self.domain {
            Validator::validate_domain(min, max)?;
        }
        if let BinSpec::Count(0) = self.spec {
            return Err(StatError::InvalidBinCount(0));
        }

        Ok(HistogramModel {
            domain: self.domain,
            spec: self.spec,
        })
    }
}

/// A validated, reusable histogram binner.
#[derive(Debug, Clone)]
pub struct HistogramModel<T> {
    /// Explicit domain; derived from the sample range when `None`.
    pub domain: Option<(T, T)>,

    /// Bin specification.
    spec: BinSpec<T>,
}

impl<T: Float> HistogramModel<T> {
    /// Bin `sample` into the configured histogram.
    ///
    /// Without an explicit domain, the sample's own range is used; an
    /// empty or constant sample then fails, since no non-degenerate
    /// domain can be derived.
    pub fn bin(&self, sample: &[T]) -> Result<Vec<HistogramBin<T>>, StatError> {
        let (min, max) = match self.domain {
            Some(domain) => domain,
            None => {
                Validator::validate_sample(sample)?;
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
                (min, max)
            }
        };

        build_histogram(sample, min, max, &self.spec)
    }
}
