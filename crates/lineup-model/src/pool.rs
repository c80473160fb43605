// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{index::CandidateIndex, selection::SELECTION_SIZE};
use num_traits::{PrimInt, Signed, ToPrimitive};
use thiserror::Error;

/// Reasons a list of candidates cannot be turned into a `CandidatePool`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The value and cost sequences differ in length.
    #[error("value and cost sequences differ in length: {values} values, {costs} costs")]
    LengthMismatch { values: usize, costs: usize },
    /// A candidate has a negative cost.
    #[error("candidate {index} has negative cost {cost}")]
    NegativeCost { index: usize, cost: i128 },
    /// A candidate value is NaN or infinite and cannot be compared.
    #[error("candidate {index} has a non-finite value")]
    NonFiniteValue { index: usize },
}

/// One item that can be picked: a point value and a cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T> {
    pub value: f64,
    pub cost: T,
}

impl<T> Candidate<T> {
    #[inline]
    pub const fn new(value: f64, cost: T) -> Self {
        Self { value, cost }
    }
}

/// The immutable, validated list of candidates a search runs over.
///
/// Data is stored as parallel arrays indexed by `CandidateIndex`:
/// - `values[i]`: the point value of candidate `i` (finite).
/// - `costs[i]`: the cost of candidate `i` (non-negative).
/// - `labels[i]`: an optional display name (player names in the fantasy use case).
///
/// Construct through `CandidatePool::try_new` or `CandidatePoolBuilder`.
#[derive(Clone, PartialEq)]
pub struct CandidatePool<T> {
    values: Vec<f64>,
    costs: Vec<T>,
    labels: Vec<Option<String>>,
}

fn validate<T>(values: &[f64], costs: &[T]) -> Result<(), PoolError>
where
    T: PrimInt + Signed,
{
    if values.len() != costs.len() {
        return Err(PoolError::LengthMismatch {
            values: values.len(),
            costs: costs.len(),
        });
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(PoolError::NonFiniteValue { index });
    }

    if let Some((index, cost)) = costs.iter().enumerate().find(|(_, c)| c.is_negative()) {
        return Err(PoolError::NegativeCost {
            index,
            cost: ToPrimitive::to_i128(cost).unwrap_or(i128::MIN),
        });
    }

    Ok(())
}

impl<T> CandidatePool<T>
where
    T: PrimInt + Signed,
{
    /// Builds a pool from two parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns a `PoolError` if the lengths differ, a cost is negative, or a
    /// value is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lineup_model::pool::{CandidatePool, PoolError};
    /// let pool = CandidatePool::try_new(vec![1.5, 2.0], vec![100i64, 250]).unwrap();
    /// assert_eq!(pool.num_candidates(), 2);
    ///
    /// let err = CandidatePool::try_new(vec![1.5], vec![100i64, 250]).unwrap_err();
    /// assert_eq!(err, PoolError::LengthMismatch { values: 1, costs: 2 });
    /// ```
    pub fn try_new(values: Vec<f64>, costs: Vec<T>) -> Result<Self, PoolError> {
        validate(&values, &costs)?;
        let labels = vec![None; values.len()];
        Ok(Self {
            values,
            costs,
            labels,
        })
    }

    /// Builds a pool by copying two parallel slices.
    #[inline]
    pub fn from_slices(values: &[f64], costs: &[T]) -> Result<Self, PoolError> {
        validate(values, costs)?;
        Ok(Self {
            values: values.to_vec(),
            costs: costs.to_vec(),
            labels: vec![None; values.len()],
        })
    }

    /// Returns the number of candidates.
    #[inline]
    pub fn num_candidates(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the pool holds no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the pool has at least `SELECTION_SIZE` candidates,
    /// the minimum for any selection to exist.
    #[inline]
    pub fn has_enough_candidates(&self) -> bool {
        self.num_candidates() >= SELECTION_SIZE
    }

    /// Returns the value of a candidate.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: CandidateIndex) -> f64 {
        let i = index.get();
        debug_assert!(
            i < self.num_candidates(),
            "called `CandidatePool::value` with candidate index out of bounds: the len is {} but the index is {}",
            self.num_candidates(),
            i
        );
        self.values[i]
    }

    /// Returns the cost of a candidate.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn cost(&self, index: CandidateIndex) -> T {
        let i = index.get();
        debug_assert!(
            i < self.num_candidates(),
            "called `CandidatePool::cost` with candidate index out of bounds: the len is {} but the index is {}",
            self.num_candidates(),
            i
        );
        self.costs[i]
    }

    /// Returns the label of a candidate, if it has one.
    #[inline]
    pub fn label(&self, index: CandidateIndex) -> Option<&str> {
        self.labels.get(index.get()).and_then(|l| l.as_deref())
    }

    /// Returns the candidate at `index`, or `None` if out of bounds.
    #[inline]
    pub fn candidate(&self, index: CandidateIndex) -> Option<Candidate<T>> {
        let i = index.get();
        if i >= self.num_candidates() {
            return None;
        }
        Some(Candidate::new(self.values[i], self.costs[i]))
    }

    /// Returns all values in enumeration order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns all costs in enumeration order.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the smallest cost in the pool, or `None` for an empty pool.
    #[inline]
    pub fn min_cost(&self) -> Option<T> {
        self.costs.iter().copied().min()
    }

    /// Iterates over `(index, candidate)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateIndex, Candidate<T>)> + '_ {
        self.values
            .iter()
            .zip(self.costs.iter())
            .enumerate()
            .map(|(i, (&value, &cost))| (CandidateIndex::new(i), Candidate::new(value, cost)))
    }

    /// Returns the number of distinct `SELECTION_SIZE`-subsets of the pool,
    /// ignoring the budget. `None` if it does not fit in a `u128`.
    pub fn num_subsets(&self) -> Option<u128> {
        let n = self.num_candidates() as u128;
        let k = SELECTION_SIZE as u128;
        if n < k {
            return Some(0);
        }
        // C(n, k) = prod_{i=1..k} (n - k + i) / i, exact at every step.
        let mut acc: u128 = 1;
        for i in 1..=k {
            acc = acc.checked_mul(n - k + i)? / i;
        }
        Some(acc)
    }
}

impl<T> std::fmt::Debug for CandidatePool<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidatePool")
            .field("num_candidates", &self.values.len())
            .field("values", &self.values)
            .field("costs", &self.costs)
            .finish()
    }
}

impl<T> std::fmt::Display for CandidatePool<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CandidatePool(candidates: {})", self.num_candidates())
    }
}

/// Mutable builder for `CandidatePool`.
///
/// Collects candidates one at a time (with optional labels) and validates
/// everything once in `build`.
#[derive(Clone, Debug, Default)]
pub struct CandidatePoolBuilder<T> {
    values: Vec<f64>,
    costs: Vec<T>,
    labels: Vec<Option<String>>,
}

impl<T> CandidatePoolBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            costs: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Creates an empty builder with room for `capacity` candidates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            costs: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of candidates added so far.
    #[inline]
    pub fn num_candidates(&self) -> usize {
        self.values.len()
    }

    /// Appends an unlabeled candidate.
    #[inline]
    pub fn add_candidate(&mut self, value: f64, cost: T) -> &mut Self {
        self.values.push(value);
        self.costs.push(cost);
        self.labels.push(None);
        self
    }

    /// Appends a labeled candidate.
    #[inline]
    pub fn add_labeled_candidate<S>(&mut self, value: f64, cost: T, label: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.values.push(value);
        self.costs.push(cost);
        self.labels.push(Some(label.into()));
        self
    }

    /// Validates the collected candidates and freezes them into a pool.
    pub fn build(self) -> Result<CandidatePool<T>, PoolError> {
        validate(&self.values, &self.costs)?;
        Ok(CandidatePool {
            values: self.values,
            costs: self.costs,
            labels: self.labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> CandidateIndex {
        CandidateIndex::new(i)
    }

    #[test]
    fn test_try_new_and_accessors() {
        let pool = CandidatePool::try_new(vec![10.0, 9.5, 8.0], vec![200i64, 150, 300]).unwrap();
        assert_eq!(pool.num_candidates(), 3);
        assert!(!pool.is_empty());
        assert!(!pool.has_enough_candidates());
        assert_eq!(pool.value(ci(1)), 9.5);
        assert_eq!(pool.cost(ci(2)), 300);
        assert_eq!(pool.label(ci(0)), None);
        assert_eq!(pool.candidate(ci(0)), Some(Candidate::new(10.0, 200)));
        assert_eq!(pool.candidate(ci(3)), None);
        assert_eq!(pool.min_cost(), Some(150));
        assert_eq!(pool.values(), &[10.0, 9.5, 8.0]);
        assert_eq!(pool.costs(), &[200, 150, 300]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = CandidatePool::<i64>::try_new(vec![1.0, 2.0, 3.0], vec![1, 2]).unwrap_err();
        assert_eq!(err, PoolError::LengthMismatch { values: 3, costs: 2 });
        assert_eq!(
            err.to_string(),
            "value and cost sequences differ in length: 3 values, 2 costs"
        );
    }

    #[test]
    fn test_negative_cost_is_rejected_with_position() {
        let err = CandidatePool::try_new(vec![1.0, 2.0, 3.0], vec![5i32, -7, 9]).unwrap_err();
        assert_eq!(err, PoolError::NegativeCost { index: 1, cost: -7 });
        assert_eq!(err.to_string(), "candidate 1 has negative cost -7");
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let err = CandidatePool::try_new(vec![1.0, f64::NAN], vec![5i64, 5]).unwrap_err();
        assert_eq!(err, PoolError::NonFiniteValue { index: 1 });

        let err = CandidatePool::try_new(vec![f64::INFINITY], vec![5i64]).unwrap_err();
        assert_eq!(err, PoolError::NonFiniteValue { index: 0 });
    }

    #[test]
    fn test_empty_pool_is_valid() {
        let pool = CandidatePool::<i64>::try_new(Vec::new(), Vec::new()).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.min_cost(), None);
        assert_eq!(pool.num_subsets(), Some(0));
    }

    #[test]
    fn test_zero_cost_is_allowed() {
        let pool = CandidatePool::try_new(vec![1.0], vec![0i64]).unwrap();
        assert_eq!(pool.min_cost(), Some(0));
    }

    #[test]
    fn test_builder_keeps_labels_and_order() {
        let mut builder = CandidatePoolBuilder::<i64>::with_capacity(3);
        builder
            .add_labeled_candidate(1.2, 190, "s1mple")
            .add_candidate(0.9, 150)
            .add_labeled_candidate(1.1, 180, String::from("zywoo"));
        assert_eq!(builder.num_candidates(), 3);

        let pool = builder.build().unwrap();
        assert_eq!(pool.label(ci(0)), Some("s1mple"));
        assert_eq!(pool.label(ci(1)), None);
        assert_eq!(pool.label(ci(2)), Some("zywoo"));
        assert_eq!(pool.label(ci(9)), None);
        assert_eq!(pool.cost(ci(1)), 150);
    }

    #[test]
    fn test_builder_validates_on_build() {
        let mut builder = CandidatePoolBuilder::<i64>::new();
        builder.add_candidate(1.0, 10).add_candidate(2.0, -1);
        assert_eq!(
            builder.build().unwrap_err(),
            PoolError::NegativeCost { index: 1, cost: -1 }
        );
    }

    #[test]
    fn test_iter_yields_pairs_in_order() {
        let pool = CandidatePool::from_slices(&[3.0, 4.0], &[30i64, 40]).unwrap();
        let items: Vec<_> = pool.iter().map(|(i, c)| (i.get(), c.value, c.cost)).collect();
        assert_eq!(items, vec![(0, 3.0, 30), (1, 4.0, 40)]);
    }

    #[test]
    fn test_num_subsets() {
        let pool = CandidatePool::try_new(vec![1.0; 5], vec![1i64; 5]).unwrap();
        assert_eq!(pool.num_subsets(), Some(1));

        let pool = CandidatePool::try_new(vec![1.0; 6], vec![1i64; 6]).unwrap();
        assert_eq!(pool.num_subsets(), Some(6));

        let pool = CandidatePool::try_new(vec![1.0; 100], vec![1i64; 100]).unwrap();
        assert_eq!(pool.num_subsets(), Some(75_287_520));
    }

    #[test]
    fn test_display() {
        let pool = CandidatePool::try_new(vec![1.0, 2.0], vec![1i64, 2]).unwrap();
        assert_eq!(format!("{}", pool), "CandidatePool(candidates: 2)");
    }
}
