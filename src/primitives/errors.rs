//! Error types for statistical computations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur across the statistics
//! core: sample validation, parameter constraints, and degenerate domains.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected counts).
//! * **Fail-Fast**: All errors represent precondition violations detected before computation.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty samples, non-finite values.
//! 2. **Parameter validation**: Invalid bandwidth, bin count, cluster count, or iteration cap.
//! 3. **Domain validation**: Degenerate numeric ranges for binning and grids.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * None of the errors are transient or retryable.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for statistical computations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// Input sample is empty; the requested statistic needs at least one observation.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Kernel bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// Binning domain is degenerate: `min` must be strictly less than `max`.
    InvalidDomain {
        /// Lower edge of the requested domain.
        min: f64,
        /// Upper edge of the requested domain.
        max: f64,
    },

    /// Histograms require at least one bin.
    InvalidBinCount(usize),

    /// Evaluation grid is unusable (empty or not sorted ascending).
    InvalidGrid(String),

    /// Cluster count must be in `1..=points`; k distinct seeds cannot be drawn otherwise.
    InvalidClusterCount {
        /// The cluster count requested.
        k: usize,
        /// Number of input points available.
        points: usize,
    },

    /// K-means requires an iteration budget of at least 1.
    InvalidIterations(usize),

    /// Threshold step must be positive and finite.
    InvalidStep(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sample is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(h) => {
                write!(f, "Invalid bandwidth: {h} (must be > 0 and finite)")
            }
            Self::InvalidDomain { min, max } => {
                write!(f, "Invalid domain: [{min}, {max}] (min must be < max)")
            }
            Self::InvalidBinCount(bins) => {
                write!(f, "Invalid bin count: {bins} (must be at least 1)")
            }
            Self::InvalidGrid(msg) => write!(f, "Invalid evaluation grid: {msg}"),
            Self::InvalidClusterCount { k, points } => {
                write!(
                    f,
                    "Invalid cluster count: {k} (must be between 1 and the number of points, {points})"
                )
            }
            Self::InvalidIterations(iters) => {
                write!(f, "Invalid iteration budget: {iters} (must be at least 1)")
            }
            Self::InvalidStep(step) => {
                write!(f, "Invalid threshold step: {step} (must be > 0 and finite)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StatError {}
