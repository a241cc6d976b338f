//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer hosts the shared validation machinery that every public entry
//! point runs before computing. Validation is centralized here so the
//! algorithms themselves can assume well-formed inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
