//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core statistical algorithms:
//! - Quantiles and distribution summaries for box plots
//! - Kernel density estimation for violin plots
//! - Histogram binning for distribution charts
//! - K-means clustering for the risk scatter plot
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Quantiles, five-number summaries, and descriptive statistics.
pub mod summary;

/// Kernel density estimation.
pub mod density;

/// Histogram binning.
pub mod histogram;

/// K-means clustering of 2D points.
pub mod kmeans;
