//! Smoothing kernels for density estimation.
//!
//! ## Purpose
//!
//! This module provides the kernel functions that turn individual sample
//! observations into smoothed density contributions. The kernel shape and
//! bandwidth together control how tightly the estimate tracks the data.
//!
//! ## Design notes
//!
//! * **Normalization**: Each kernel integrates to 1 over its support, so the
//!   mean of bandwidth-scaled contributions is itself a density.
//! * **Convention**: `density_contribution(d, h)` evaluates `K(d / h) / h`,
//!   folding the bandwidth division into the kernel as the charting code did.
//! * **Support**: Bounded kernels return exactly zero outside `[-1, 1]`.
//!
//! ## Key concepts
//!
//! * **Epanechnikov**: The default kernel, `0.75 * (1 - u^2)` on `[-1, 1]`;
//!   mean-squared-error optimal and the one the violin plots use.
//! * **Bandwidth**: The smoothing parameter; analogous to histogram bin width.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not select bandwidths automatically.
//! * This module does not average contributions over a sample (see the density estimator).

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Leading coefficient of the Epanechnikov kernel: 3/4 normalizes it over [-1, 1].
const EPANECHNIKOV_SCALE: f64 = 0.75;

/// 1 / sqrt(2*pi), the Gaussian kernel normalization constant.
const INV_SQRT_2PI: f64 = 0.39894228040143267793994605993438186847585863116493_f64;

/// Cutoff for Gaussian kernel evaluation.
///
/// Beyond this normalized distance the Gaussian kernel is effectively zero
/// (exp(-6^2/2) approx 6.9e-9), so evaluation short-circuits to avoid underflow.
const GAUSSIAN_CUTOFF: f64 = 6.0;

// ============================================================================
// Kernel Enum
// ============================================================================

/// Smoothing kernel for kernel density estimation.
///
/// Each kernel defines a function K: ℝ → [0, ∞) with unit integral. Bounded
/// kernels have support on [-1, 1], while the Gaussian kernel has unbounded
/// support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// Epanechnikov kernel: K(u) = 0.75 * (1 - u^2) for |u| <= 1.
    ///
    /// This is the default and the kernel every violin plot uses.
    #[default]
    Epanechnikov,

    /// Gaussian kernel: K(u) = exp(-u^2 / 2) / sqrt(2*pi).
    Gaussian,

    /// Triangular kernel: K(u) = 1 - |u| for |u| <= 1.
    Triangular,

    /// Uniform (rectangular) kernel: K(u) = 1/2 for |u| <= 1.
    Uniform,
}

impl Kernel {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Kernel::Epanechnikov => "Epanechnikov",
            Kernel::Gaussian => "Gaussian",
            Kernel::Triangular => "Triangular",
            Kernel::Uniform => "Uniform",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            Kernel::Gaussian => None, // Unbounded
            _ => Some((-1.0, 1.0)),   // All others are bounded on [-1, 1]
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Kernel Evaluation
    // ========================================================================

    /// Evaluate the unscaled kernel K(u) at a normalized distance.
    #[inline]
    pub fn evaluate<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        // Fast path for bounded kernels: zero outside support
        if self.is_bounded() && abs_u > T::one() {
            return T::zero();
        }

        match self {
            Kernel::Epanechnikov => {
                let scale = T::from(EPANECHNIKOV_SCALE).unwrap_or_else(T::zero);
                scale * (T::one() - abs_u * abs_u)
            }

            Kernel::Gaussian => {
                let u_f64 = abs_u.to_f64().unwrap_or(f64::INFINITY);

                // Short-circuit far tails to avoid underflow
                if u_f64 > GAUSSIAN_CUTOFF {
                    return T::zero();
                }
                let val = (-0.5 * u_f64 * u_f64).exp() * INV_SQRT_2PI;
                T::from(val).unwrap_or_else(T::zero)
            }

            Kernel::Triangular => T::one() - abs_u,

            Kernel::Uniform => T::from(0.5).unwrap_or_else(T::zero),
        }
    }

    /// Evaluate the bandwidth-scaled contribution K(d / h) / h for a
    /// displacement `d` between a grid point and an observation.
    ///
    /// This is the folded `/h` convention of the source charts: averaging
    /// these contributions over a sample yields the density estimate directly.
    #[inline]
    pub fn density_contribution<T: Float>(&self, d: T, h: T) -> T {
        self.evaluate(d / h) / h
    }
}
