//! Count-vector usage profiles for tracked variables.
//!
//! One [`CountVector`] is created per tracked variable before traversal
//! begins, accumulates weighted occurrence counts as the traversal reports
//! reference events, and is compared pairwise against other profiles once
//! traversal completes.
//!
//! # Module Structure
//!
//! - `condition`: the counting-condition seam ([`Condition`], [`from_fn`])
//! - `count_vector`: the profile type and its difference metric

mod condition;
mod count_vector;


// Re-export public types
pub use condition::{from_fn, BoxedCondition, Condition};
pub use count_vector::CountVector;
