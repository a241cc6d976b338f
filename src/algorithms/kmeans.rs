//! K-means clustering of 2D points.
//!
//! ## Purpose
//!
//! This module partitions points in a 2-dimensional feature space into `k`
//! clusters by Lloyd iteration: assign each point to its nearest centroid,
//! recompute centroids as member means, repeat until stable or the iteration
//! budget runs out. The risk-clustering scatter plot is its one consumer.
//!
//! ## Design notes
//!
//! * **Injectable initialization**: Callers choose explicit seed centroids
//!   (the deterministic test seam), a seeded uniform draw of distinct input
//!   points, or the first `k` points in input order. Randomness is opt-in;
//!   there is no ambient entropy source in a `no_std` build.
//! * **Tie breaking**: Equidistant centroids resolve to the lowest cluster index.
//! * **Empty clusters**: A centroid with no members keeps its previous
//!   position; it is not reseeded.
//! * **Best effort**: Exhausting the iteration budget is not an error; the
//!   result carries a convergence flag instead.
//!
//! ## Invariants
//!
//! * Every assignment index is in `[0, k)`; every point gets exactly one.
//! * `centroids.len() == k` in every result.
//! * Identical inputs and initialization produce identical results.
//!
//! ## Non-goals
//!
//! * This module does not order centroids or map them to risk labels; that
//!   is caller-side policy.
//! * This module does not guarantee convergence within the budget.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::StatError;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for no-std centroid seeding.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// A point in the 2-dimensional feature space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<T> {
    /// First feature coordinate.
    pub x: T,

    /// Second feature coordinate.
    pub y: T,
}

impl<T: Float> Point2D<T> {
    /// Construct a point from its two coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_sq(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// How the initial centroids are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Initialization<T> {
    /// The first `k` points of the input, in input order. Deterministic
    /// without any seed; the default.
    FirstK,

    /// `k` distinct input points drawn uniformly without replacement,
    /// reproducible for a given seed.
    Seeded(u64),

    /// Caller-provided centroids, exactly `k` of them.
    Explicit(Vec<Point2D<T>>),
}

impl<T> Default for Initialization<T> {
    fn default() -> Self {
        Self::FirstK
    }
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering<T> {
    /// Final centroid positions, one per cluster.
    pub centroids: Vec<Point2D<T>>,

    /// Cluster index per input point, each in `[0, centroids.len())`.
    pub assignment: Vec<usize>,

    /// Number of Lloyd iterations performed.
    pub iterations_used: usize,

    /// `true` if an iteration produced no membership changes; `false` if
    /// the iteration budget was exhausted first.
    pub converged: bool,
}

impl<T: Float> Clustering<T> {
    /// Number of clusters.
    #[inline]
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Indices of the input points assigned to cluster `cluster`.
    pub fn members_of(&self, cluster: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}

// ============================================================================
// Clustering
// ============================================================================

/// Partition `points` into `k` clusters within `max_iterations` Lloyd steps.
///
/// Fails with [`StatError::InvalidClusterCount`] when `k == 0` or
/// `k > points.len()`, with [`StatError::EmptyInput`] for no points, and
/// with [`StatError::InvalidIterations`] for a zero iteration budget.
pub fn cluster<T: Float>(
    points: &[Point2D<T>],
    k: usize,
    max_iterations: usize,
    init: &Initialization<T>,
) -> Result<Clustering<T>, StatError> {
    Validator::validate_points(points)?;
    Validator::validate_cluster_count(k, points.len())?;
    Validator::validate_iterations(max_iterations)?;

    let mut centroids = initial_centroids(points, k, init)?;
    let mut assignment = assign(points, &centroids);

    let mut iterations_used = 0;
    let mut converged = false;

    while iterations_used < max_iterations {
        iterations_used += 1;

        update_centroids(points, &assignment, &mut centroids);

        let next = assign(points, &centroids);
        if next == assignment {
            converged = true;
            break;
        }
        assignment = next;
    }

    Ok(Clustering {
        centroids,
        assignment,
        iterations_used,
        converged,
    })
}

/// Choose the initial centroids according to the initialization policy.
fn initial_centroids<T: Float>(
    points: &[Point2D<T>],
    k: usize,
    init: &Initialization<T>,
) -> Result<Vec<Point2D<T>>, StatError> {
    match init {
        Initialization::FirstK => Ok(points[..k].to_vec()),

        Initialization::Seeded(seed) => {
            // Partial Fisher-Yates over indices: k distinct draws without
            // replacement, uniform for a fixed seed
            let n = points.len();
            let mut rng = SimpleRng::new(*seed);
            let mut indices: Vec<usize> = (0..n).collect();
            for i in 0..k {
                let j = i + (rng.next_u32() as usize) % (n - i);
                indices.swap(i, j);
            }
            Ok(indices[..k].iter().map(|&i| points[i]).collect())
        }

        Initialization::Explicit(centroids) => {
            if centroids.len() != k {
                return Err(StatError::InvalidInput(format!(
                    "expected {k} initial centroids, got {}",
                    centroids.len()
                )));
            }
            Ok(centroids.clone())
        }
    }
}

/// Assign each point to the nearest centroid, ties to the lowest index.
fn assign<T: Float>(points: &[Point2D<T>], centroids: &[Point2D<T>]) -> Vec<usize> {
    points
        .iter()
        .map(|p| {
            let mut best = 0usize;
            let mut best_dist = p.distance_sq(&centroids[0]);
            for (c, centroid) in centroids.iter().enumerate().skip(1) {
                let dist = p.distance_sq(centroid);
                // Strict inequality keeps the lowest index on ties
                if dist < best_dist {
                    best = c;
                    best_dist = dist;
                }
            }
            best
        })
        .collect()
}

/// Recompute each centroid as the mean of its members; empty clusters keep
/// their previous position.
fn update_centroids<T: Float>(
    points: &[Point2D<T>],
    assignment: &[usize],
    centroids: &mut [Point2D<T>],
) {
    let k = centroids.len();
    let mut sums = vec![Point2D::new(T::zero(), T::zero()); k];
    let mut counts = vec![0usize; k];

    for (p, &c) in points.iter().zip(assignment) {
        sums[c].x = sums[c].x + p.x;
        sums[c].y = sums[c].y + p.y;
        counts[c] += 1;
    }

    for c in 0..k {
        if counts[c] > 0 {
            let n = T::from(counts[c]).unwrap_or_else(T::one);
            centroids[c] = Point2D::new(sums[c].x / n, sums[c].y / n);
        }
    }
}
