//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer derives chart-facing measures from the raw statistics:
//! - Threshold sweeps reporting flagged-observation proportions
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Threshold sweeps over flagged observations.
pub mod threshold;
