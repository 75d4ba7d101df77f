//! Centralized named constants.
//!
//! Magic numbers used by the count-vector core and its tests live here so
//! they have a single source of truth and documented meaning.

/// Weighting applied to every condition when none is supplied explicitly.
///
/// Matches the accumulation contract: an unweighted profile adds exactly 1
/// per matched condition per reference.
pub const DEFAULT_WEIGHTING: f64 = 1.0;

/// Absolute tolerance for floating-point comparisons in tests.
///
/// Difference values are ratios of accumulated `f64` sums; anything closer
/// than this is considered equal.
pub const EPSILON: f64 = 1e-9;
