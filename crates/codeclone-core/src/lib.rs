//! Code Clone Detection Core Library
//!
//! Provides the count-vector primitive used to quantify how similarly two
//! source-code variables are used. The surrounding pipeline walks an AST,
//! reports every reference to a tracked variable as an opaque evidence
//! payload, and later compares the resulting usage profiles pairwise to
//! group variables into clone candidates.
//!
//! # Architecture
//!
//! This crate defines:
//! - The usage profile type ([`CountVector`]) with its accumulation and
//!   normalized pairwise difference metric
//! - The counting-condition seam ([`Condition`], [`BoxedCondition`],
//!   [`from_fn`])
//! - Error types and the crate [`Result`] alias
//! - Named constants ([`constants`])
//!
//! Everything that produces the inputs (AST traversal, reference-event
//! extraction, the semantics of the counting predicates) lives upstream.
//! Clustering of variables by the resulting distances lives downstream.
//!
//! # Example
//!
//! ```
//! use codeclone_core::{from_fn, CountVector};
//!
//! // One dimension per usage predicate; evidence here is the access kind.
//! let mut profile = CountVector::new(
//!     "i",
//!     vec![
//!         from_fn(|kind: &str| kind == "read"),
//!         from_fn(|kind: &str| kind == "write"),
//!     ],
//! );
//!
//! profile.count_reference("read");
//! profile.count_reference("read");
//! profile.count_reference("write");
//!
//! assert_eq!(profile.counts(), &[2.0, 1.0]);
//! ```

pub mod constants;
pub mod error;
pub mod vector;

// Re-exports for convenience
pub use error::{CountVectorError, Result};
pub use vector::{from_fn, BoxedCondition, Condition, CountVector};
