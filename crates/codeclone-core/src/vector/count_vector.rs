//! The count vector: a weighted, condition-indexed usage profile.

use std::fmt;

use tracing::trace;

use crate::constants::DEFAULT_WEIGHTING;
use crate::error::{CountVectorError, Result};

use super::condition::BoxedCondition;

/// Usage profile of one tracked source variable.
///
/// Holds an ordered list of counting conditions, one non-negative
/// weighting per condition, and one accumulated total per condition. All
/// three sequences are positionally aligned and always equal in length;
/// construction validates this and no operation can change a profile's
/// dimensionality afterwards.
///
/// `E` is the opaque evidence payload type describing one observed
/// reference. Profiles over different evidence types are different Rust
/// types, so a payload-type mismatch is a compile error rather than a
/// runtime one.
///
/// A profile is mutated exclusively through [`count_reference`] (`&mut
/// self`, so exactly one traversal context owns it at a time) and is
/// read-only once traversal completes. Distinct profiles share no state
/// and may live on different threads.
///
/// [`count_reference`]: CountVector::count_reference
pub struct CountVector<E: ?Sized> {
    /// Variable identifier, opaque to this core.
    name: String,
    /// Ordered counting conditions, fixed for the profile's lifetime.
    conditions: Vec<BoxedCondition<E>>,
    /// Non-negative finite weight per condition.
    weightings: Vec<f64>,
    /// Accumulated weighted total per condition.
    counts: Vec<f64>,
}

impl<E: ?Sized> CountVector<E> {
    /// Create a profile with the default weighting of
    /// [`DEFAULT_WEIGHTING`] for every condition.
    ///
    /// Cannot fail: the weightings are generated to match the conditions,
    /// and the default weighting is valid by definition.
    pub fn new(name: impl Into<String>, conditions: Vec<BoxedCondition<E>>) -> Self {
        let dims = conditions.len();
        Self {
            name: name.into(),
            conditions,
            weightings: vec![DEFAULT_WEIGHTING; dims],
            counts: vec![0.0; dims],
        }
    }

    /// Create a profile with explicit per-condition weightings.
    ///
    /// # Errors
    ///
    /// - [`CountVectorError::DimensionMismatch`] if `weightings` and
    ///   `conditions` disagree on length.
    /// - [`CountVectorError::InvalidWeighting`] if any weighting is
    ///   negative, NaN, or infinite. Rejecting these at construction is
    ///   what keeps [`difference`](CountVector::difference) inside
    ///   `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use codeclone_core::{from_fn, CountVector, CountVectorError};
    ///
    /// let result = CountVector::with_weightings(
    ///     "x",
    ///     vec![from_fn(|_: &str| true)],
    ///     vec![1.0, 2.0],
    /// );
    /// assert_eq!(
    ///     result.err(),
    ///     Some(CountVectorError::DimensionMismatch { expected: 1, actual: 2 }),
    /// );
    /// ```
    pub fn with_weightings(
        name: impl Into<String>,
        conditions: Vec<BoxedCondition<E>>,
        weightings: Vec<f64>,
    ) -> Result<Self> {
        if weightings.len() != conditions.len() {
            return Err(CountVectorError::DimensionMismatch {
                expected: conditions.len(),
                actual: weightings.len(),
            });
        }
        for (index, &value) in weightings.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(CountVectorError::InvalidWeighting { index, value });
            }
        }

        let dims = conditions.len();
        Ok(Self {
            name: name.into(),
            conditions,
            weightings,
            counts: vec![0.0; dims],
        })
    }

    /// The variable identifier this profile tracks.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimensionality: the number of conditions (equivalently, of counts).
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True for a zero-dimensional profile.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The accumulated totals, in condition order.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// The per-condition weightings, in condition order.
    pub fn weightings(&self) -> &[f64] {
        &self.weightings
    }

    /// Iterate over the accumulated totals in condition order.
    ///
    /// The iterator borrows the profile, so re-iterating yields the same
    /// sequence unless [`count_reference`](CountVector::count_reference)
    /// ran in between.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.counts.iter().copied()
    }

    /// Record one observed reference to the tracked variable.
    ///
    /// Every condition is evaluated against `evidence` in condition
    /// order; each match adds that condition's weighting to its total.
    /// Conditions are independent and not mutually exclusive: any subset
    /// may fire for the same evidence.
    ///
    /// # Panics
    ///
    /// A panicking condition unwinds through this method unmodified;
    /// nothing is caught or wrapped here.
    pub fn count_reference(&mut self, evidence: &E) {
        let mut matched = 0usize;
        for (i, condition) in self.conditions.iter().enumerate() {
            if condition.matches(evidence) {
                self.counts[i] += self.weightings[i];
                matched += 1;
            }
        }
        trace!(name = %self.name, matched, "counted reference");
    }

    /// Normalized difference to another profile of equal dimensionality.
    ///
    /// Computes `Σᵢ (xᵢ − yᵢ)² / Σᵢ max(xᵢ, yᵢ)²`, with the degenerate
    /// all-zero denominator short-circuited to `0.0`. Each dimension
    /// normalizes against its own maximum, so dimensions with large
    /// counts need no separate rescaling. This is not a Euclidean or
    /// cosine distance.
    ///
    /// # Returns
    ///
    /// A value in `[0, 1]`: `0.0` means the profiles are identical
    /// (including when both are all-zero or zero-dimensional), `1.0`
    /// means maximal divergence. The bound holds because for
    /// non-negative x, y: `(x − y)² ≤ max(x, y)²` per dimension.
    ///
    /// # Errors
    ///
    /// [`CountVectorError::DimensionMismatch`] if the profiles disagree
    /// on dimensionality.
    ///
    /// # Example
    ///
    /// ```
    /// use codeclone_core::{from_fn, CountVector};
    ///
    /// let mut a = CountVector::new("a", vec![from_fn(|_: &str| true)]);
    /// let b = CountVector::new("b", vec![from_fn(|_: &str| true)]);
    ///
    /// assert_eq!(a.difference(&b).unwrap(), 0.0);
    /// a.count_reference("ref");
    /// assert_eq!(a.difference(&b).unwrap(), 1.0);
    /// ```
    pub fn difference(&self, other: &CountVector<E>) -> Result<f64> {
        if other.len() != self.len() {
            return Err(CountVectorError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let maxabs: f64 = self
            .counts
            .iter()
            .zip(&other.counts)
            .map(|(&x, &y)| x.max(y).powi(2))
            .sum();
        if maxabs == 0.0 {
            return Ok(0.0);
        }

        let squared_diff: f64 = self
            .counts
            .iter()
            .zip(&other.counts)
            .map(|(&x, &y)| (x - y).powi(2))
            .sum();

        Ok(squared_diff / maxabs)
    }
}

impl<'a, E: ?Sized> IntoIterator for &'a CountVector<E> {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter().copied()
    }
}

impl<E: ?Sized> fmt::Display for CountVector<E> {
    /// Renders the accumulated totals, e.g. `[1.0, 0.0, 2.0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.counts)
    }
}

impl<E: ?Sized> fmt::Debug for CountVector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Conditions are opaque callables; show everything else.
        f.debug_struct("CountVector")
            .field("name", &self.name)
            .field("dimensions", &self.len())
            .field("weightings", &self.weightings)
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}
