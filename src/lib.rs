//! # denstat — descriptive statistics and density estimation for charts
//!
//! `denstat` is the numerical core behind a family of interactive
//! statistical charts: box plots, kernel-density "violin" plots, histograms,
//! and a k-means risk-clustering scatter plot. It implements the four
//! reusable computations those charts share, as pure functions over
//! caller-owned samples:
//!
//! - **Five-number summaries** — Q1/median/Q3 with Tukey whiskers.
//! - **Kernel density estimation** — Epanechnikov by default, caller-chosen
//!   bandwidth, evaluated over an explicit grid.
//! - **Histogram binning** — equal-width or explicit thresholds, half-open
//!   bins with a closed final bin.
//! - **2D k-means clustering** — Lloyd iteration with an injectable
//!   initialization for reproducible runs.
//!
//! Rendering, CSV parsing, and UI wiring are deliberately out of scope: this
//! crate takes numeric samples in and hands value types back.
//!
//! ## Quick Start
//!
//! ### Box-plot statistics
//!
//! ```rust
//! use denstat::prelude::*;
//!
//! let sample = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let summary = FiveNumberSummary::from_sample(&sample)?;
//!
//! assert_eq!(summary.q1, 3.0);
//! assert_eq!(summary.median, 5.0);
//! assert_eq!(summary.q3, 7.0);
//! assert_eq!(summary.lower_whisker, 1.0);
//! assert_eq!(summary.upper_whisker, 9.0);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ### Violin-plot density curve
//!
//! ```rust
//! use denstat::prelude::*;
//!
//! let deltas = vec![-0.4_f64, -0.1, 0.0, 0.2, 0.3, 0.8, 1.1];
//!
//! let curve = Kde::new()
//!     .bandwidth(0.4)            // hand-picked, like the charts
//!     .kernel(Kernel::Epanechnikov)
//!     .grid_points(60)
//!     .build()?
//!     .estimate(&deltas)?;
//!
//! // Violin half-width scales to the curve's peak
//! let peak = curve.max_density();
//! assert!(peak > 0.0);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ### Risk clustering
//!
//! ```rust
//! use denstat::prelude::*;
//!
//! let points = vec![
//!     Point2D::new(5.1_f64, 90.0),
//!     Point2D::new(5.3, 95.0),
//!     Point2D::new(6.4, 120.0),
//!     Point2D::new(6.6, 125.0),
//!     Point2D::new(8.0, 160.0),
//!     Point2D::new(8.2, 170.0),
//! ];
//!
//! let clustering = KMeans::new()
//!     .clusters(3)
//!     .max_iterations(50)
//!     .seed(42)                  // reproducible initialization
//!     .build()?
//!     .fit(&points)?;
//!
//! assert_eq!(clustering.centroids.len(), 3);
//! assert!(clustering.assignment.iter().all(|&c| c < 3));
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<_, StatError>`. All failures are local
//! precondition violations (empty sample, degenerate domain, impossible
//! cluster count) detected before computation begins; none are transient.
//! Callers should handle them explicitly — e.g., skip a chart panel whose
//! sample is empty — rather than let NaN leak into rendering.
//!
//! ```rust
//! use denstat::prelude::*;
//!
//! let empty: Vec<f64> = Vec::new();
//! match FiveNumberSummary::from_sample(&empty) {
//!     Ok(summary) => println!("median {}", summary.median),
//!     Err(StatError::EmptyInput) => { /* skip this panel */ }
//!     Err(e) => eprintln!("summary failed: {e}"),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! denstat = { version = "0.1", default-features = false }
//! ```
//!
//! All computations are synchronous, allocation-light, and free of shared
//! mutable state; parallel invocation across disjoint samples needs no
//! locking.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - shared validation.
mod engine;

// Layer 4: Algorithms - core statistical algorithms.
mod algorithms;

// Layer 5: Evaluation - chart-facing derived measures.
mod evaluation;

// High-level fluent API for the statistics core.
mod api;

// Standard denstat prelude.
pub mod prelude {
    pub use crate::api::{
        group_thresholds, quantile, risk_curve, Clustering, DensityCurve, DensityEstimator,
        DensityPoint, DescriptiveStats, FiveNumberSummary, Histogram, HistogramBin,
        HistogramModel, Initialization, KMeans, KMeansModel, Kde, Kernel, Point2D, StatError,
        ThresholdPoint,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
